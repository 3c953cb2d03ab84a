//! Series extraction for the revenue and cost chart views

use super::Projection;
use serde::{Deserialize, Serialize};

/// Which chart the display layer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartView {
    /// Cumulative revenue
    Revenue,
    /// Agency and in-house cost side by side
    Cost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month_label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<ChartPoint>,
}

impl Projection {
    /// Series to plot for a chart view, in month order
    pub fn series(&self, view: ChartView) -> Vec<ChartSeries> {
        match view {
            ChartView::Revenue => vec![
                self.series_of("Cumulative revenue", |m| m.cumulative_revenue),
            ],
            ChartView::Cost => vec![
                self.series_of("Agency cost", |m| m.cumulative_agency_cost),
                self.series_of("In-house cost", |m| m.cumulative_human_cost),
            ],
        }
    }

    fn series_of<F>(&self, label: &str, value: F) -> ChartSeries
    where
        F: Fn(&super::MonthlyProjection) -> f64,
    {
        ChartSeries {
            label: label.to_string(),
            points: self
                .months
                .iter()
                .map(|m| ChartPoint { month_label: m.label(), value: value(m) })
                .collect(),
        }
    }
}
