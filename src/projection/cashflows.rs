//! Monthly rows and summary metrics produced by a projection

use serde::{Deserialize, Serialize};

/// One month of the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// 1-based month number
    pub month_index: u32,

    /// Customers paying this month (the same cohort joins every month, none leave)
    pub total_students: u64,

    /// Revenue recognised in this month alone
    pub monthly_revenue: f64,

    /// Revenue from month 1 through this month
    pub cumulative_revenue: f64,

    /// Running agency cost as shown on the cost chart
    pub cumulative_agency_cost: f64,

    /// Running in-house salary cost
    pub cumulative_human_cost: f64,

    /// Cumulative revenue less the agency cost plus a further setup fee
    pub net_profit: f64,
}

impl MonthlyProjection {
    /// Axis label used by the chart views
    pub fn label(&self) -> String {
        format!("Month {}", self.month_index)
    }
}

/// Headline figures derived once per projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// floor(trials * conversion rate / 100)
    pub new_students_per_month: u64,

    /// New customers per month times tuition
    pub new_revenue_per_month: f64,

    /// In-house annual cost less agency annual cost
    pub annual_savings: f64,

    /// 12-month return on the agency cost, in percent
    pub roi: f64,
}

/// Full 12-month projection for one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub months: Vec<MonthlyProjection>,
    pub summary: SummaryMetrics,
}

impl Projection {
    /// Row for a 1-based month number
    pub fn month(&self, month_index: u32) -> Option<&MonthlyProjection> {
        if month_index == 0 {
            return None;
        }
        self.months.get((month_index - 1) as usize)
    }

    /// Last row of the projection
    pub fn final_month(&self) -> Option<&MonthlyProjection> {
        self.months.last()
    }

    /// ROI rounded to a whole percent for display.
    /// Halves round toward +infinity, so -12.5 shows as -12.
    pub fn roi_display(&self) -> i64 {
        (self.summary.roi + 0.5).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_roi(roi: f64) -> Projection {
        Projection {
            months: Vec::new(),
            summary: SummaryMetrics {
                new_students_per_month: 0,
                new_revenue_per_month: 0.0,
                annual_savings: 34_000.0,
                roi,
            },
        }
    }

    #[test]
    fn test_roi_display_rounds_halves_up() {
        assert_eq!(with_roi(777.5).roi_display(), 778);
        assert_eq!(with_roi(777.49).roi_display(), 777);
        assert_eq!(with_roi(-12.5).roi_display(), -12);
        assert_eq!(with_roi(-12.51).roi_display(), -13);
        assert_eq!(with_roi(-100.0).roi_display(), -100);
    }

    #[test]
    fn test_month_lookup_on_empty_projection() {
        let projection = with_roi(0.0);
        assert!(projection.month(1).is_none());
        assert!(projection.final_month().is_none());
    }
}
