//! Fee and salary assumptions for the two cost structures being compared

use super::{
    AGENCY_MONTHLY_FEE, AGENCY_SETUP_FEE, HUMAN_MONTHLY_SALARY, HUMAN_SETUP_COST,
    PROJECTION_MONTHS,
};
use crate::error::{Result, RoiError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Cost assumptions for the agency and the in-house benchmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// One-time agency setup fee
    #[serde(default = "default_agency_setup_fee")]
    pub agency_setup_fee: f64,

    /// Flat agency fee per month
    #[serde(default = "default_agency_monthly_fee")]
    pub agency_monthly_fee: f64,

    /// In-house salary per month
    #[serde(default = "default_human_monthly_salary")]
    pub human_monthly_salary: f64,

    /// In-house one-time cost
    #[serde(default)]
    pub human_setup_cost: f64,
}

fn default_agency_setup_fee() -> f64 { AGENCY_SETUP_FEE }
fn default_agency_monthly_fee() -> f64 { AGENCY_MONTHLY_FEE }
fn default_human_monthly_salary() -> f64 { HUMAN_MONTHLY_SALARY }

impl Default for CostModel {
    fn default() -> Self {
        Self {
            agency_setup_fee: AGENCY_SETUP_FEE,
            agency_monthly_fee: AGENCY_MONTHLY_FEE,
            human_monthly_salary: HUMAN_MONTHLY_SALARY,
            human_setup_cost: HUMAN_SETUP_COST,
        }
    }
}

impl CostModel {
    /// Every value must be finite and non-negative, and the month-12 agency
    /// cost (the ROI denominator) must be strictly positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("agency_setup_fee", self.agency_setup_fee),
            ("agency_monthly_fee", self.agency_monthly_fee),
            ("human_monthly_salary", self.human_monthly_salary),
            ("human_setup_cost", self.human_setup_cost),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RoiError::InvalidCostModel {
                    field,
                    reason: format!("{value} must be a finite, non-negative amount"),
                });
            }
        }
        if self.final_agency_cost() <= 0.0 {
            return Err(RoiError::InvalidCostModel {
                field: "agency_setup_fee",
                reason: "agency fees must not all be zero".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a cost model from JSON and validate it. Missing fields take defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let model: Self = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    /// Load a cost model from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Agency cost accumulated by the end of the projection, as exposed on
    /// the month-12 row. The setup fee counts twice: once as the seed and
    /// once more in month 1.
    pub fn final_agency_cost(&self) -> f64 {
        2.0 * self.agency_setup_fee + self.agency_monthly_fee * PROJECTION_MONTHS as f64
    }

    /// Annual savings of the agency over the in-house hire.
    /// Counts the setup fee once, unlike the cumulative agency cost.
    pub fn annual_savings(&self) -> f64 {
        let months = PROJECTION_MONTHS as f64;
        self.human_monthly_salary * months
            - (self.agency_setup_fee + self.agency_monthly_fee * months)
    }
}
