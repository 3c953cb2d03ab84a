//! Agency ROI - 12-month revenue and cost projection for an outsourced sales agency
//!
//! This library provides:
//! - The projection engine comparing agency fees against an in-house hire
//! - Input domains and the clamping applied by interactive controls
//! - A memoising calculator session for one visitor
//! - Revenue and cost chart series, text summaries, CSV and JSON export
//! - A parallel sensitivity sweep over every slider combination

pub mod error;
pub mod inputs;
pub mod projection;
pub mod session;
pub mod report;
pub mod sweep;

// Re-export commonly used types
pub use error::{Result, RoiError};
pub use inputs::CalculationInputs;
pub use projection::{compute_projection, CostModel, Projection, ProjectionEngine};
pub use session::{CalculatorSession, InputChange};
