//! Projection engine for the 12-month agency vs. in-house comparison

mod cost_model;
mod engine;
mod cashflows;
mod chart;

pub use cost_model::CostModel;
pub use engine::{compute_projection, ProjectionEngine};
pub use cashflows::{MonthlyProjection, Projection, SummaryMetrics};
pub use chart::{ChartPoint, ChartSeries, ChartView};

/// Length of every projection, in months
pub const PROJECTION_MONTHS: u32 = 12;

// ============================================================================
// Default Cost Constants
// ============================================================================
// The agency charges a one-time setup fee plus a flat monthly fee.
// The benchmark is a single in-house hire on a flat salary with no setup cost.

/// One-time agency setup fee, applied at month 1
pub const AGENCY_SETUP_FEE: f64 = 2000.0;

/// Flat agency fee, applied every month including month 1
pub const AGENCY_MONTHLY_FEE: f64 = 1000.0;

/// Monthly salary of the in-house hire
pub const HUMAN_MONTHLY_SALARY: f64 = 4000.0;

/// Setup cost of the in-house hire
pub const HUMAN_SETUP_COST: f64 = 0.0;
