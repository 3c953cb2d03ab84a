//! Month-by-month accumulation of revenue and both cost structures
//!
//! The agency accumulator is seeded with the setup fee and then charged the
//! setup fee again in month 1, so the exposed agency cost carries the fee
//! twice. Net profit subtracts the fee a third time on top of that.

use super::{CostModel, MonthlyProjection, Projection, SummaryMetrics, PROJECTION_MONTHS};
use crate::error::Result;
use crate::inputs::CalculationInputs;
use log::debug;

/// Stateless projection engine bound to a cost model
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    cost_model: CostModel,
}

impl ProjectionEngine {
    /// Create an engine, rejecting cost models the ROI is undefined for
    pub fn new(cost_model: CostModel) -> Result<Self> {
        cost_model.validate()?;
        Ok(Self { cost_model })
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Project 12 months for the given inputs.
    ///
    /// Total over finite, non-negative tuition: slider ranges are not
    /// enforced here, and `retention_months` is not read.
    pub fn project(&self, inputs: &CalculationInputs) -> Projection {
        let costs = &self.cost_model;

        let new_students = new_students_per_month(inputs);
        let new_revenue = new_students as f64 * inputs.tuition;

        let mut cumulative_revenue = 0.0;
        let mut cumulative_agency_cost = costs.agency_setup_fee;
        let mut cumulative_human_cost = costs.human_setup_cost;

        let mut months = Vec::with_capacity(PROJECTION_MONTHS as usize);

        for month in 1..=PROJECTION_MONTHS {
            let total_students = new_students * month as u64;
            let monthly_revenue = total_students as f64 * inputs.tuition;
            cumulative_revenue += monthly_revenue;

            cumulative_agency_cost += if month == 1 {
                costs.agency_setup_fee + costs.agency_monthly_fee
            } else {
                costs.agency_monthly_fee
            };
            cumulative_human_cost += costs.human_monthly_salary;

            // Separate from the exposed agency cost
            let net_profit_cost_basis = cumulative_agency_cost + costs.agency_setup_fee;

            months.push(MonthlyProjection {
                month_index: month,
                total_students,
                monthly_revenue,
                cumulative_revenue,
                cumulative_agency_cost,
                cumulative_human_cost,
                net_profit: cumulative_revenue - net_profit_cost_basis,
            });
        }

        // cumulative_agency_cost >= 2 * setup fee > 0 for a validated model
        let roi = (cumulative_revenue - cumulative_agency_cost) / cumulative_agency_cost * 100.0;

        let summary = SummaryMetrics {
            new_students_per_month: new_students,
            new_revenue_per_month: new_revenue,
            annual_savings: costs.annual_savings(),
            roi,
        };

        debug!(
            "projected trials={} rate={}% tuition={}: students/month={}, month-12 revenue={:.2}, roi={:.2}%",
            inputs.monthly_trials, inputs.conversion_rate, inputs.tuition,
            new_students, cumulative_revenue, roi
        );

        Projection { months, summary }
    }
}

/// Project with the default cost model
pub fn compute_projection(inputs: &CalculationInputs) -> Projection {
    ProjectionEngine::default().project(inputs)
}

/// floor(trials * rate / 100), in exact integer arithmetic
fn new_students_per_month(inputs: &CalculationInputs) -> u64 {
    inputs.monthly_trials as u64 * inputs.conversion_rate as u64 / 100
}
