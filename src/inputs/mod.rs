//! Calculator inputs and the interactive domains they are captured in

mod domain;

pub use domain::{
    InputDomain, sanitize_tuition, CONVERSION_RATE_DOMAIN, MONTHLY_TRIALS_DOMAIN,
    TUITION_SLIDER_DOMAIN,
};

use crate::error::{Result, RoiError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The four values a visitor adjusts on the calculator
///
/// Immutable per computation: the engine only ever borrows it. The mutable
/// copy lives in [`crate::session::CalculatorSession`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Trial leads entering the funnel each month
    #[serde(default = "default_monthly_trials")]
    pub monthly_trials: u32,

    /// Percentage of trials that convert (30 = 30%)
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: u32,

    /// Recurring price charged per customer per month
    #[serde(default = "default_tuition")]
    pub tuition: f64,

    /// Expected customer lifetime in months.
    /// Not read by the projection: no attrition is modelled.
    #[serde(default = "default_retention_months")]
    pub retention_months: u32,
}

fn default_monthly_trials() -> u32 { 50 }
fn default_conversion_rate() -> u32 { 30 }
fn default_tuition() -> f64 { 120.0 }
fn default_retention_months() -> u32 { 12 }

impl Default for CalculationInputs {
    fn default() -> Self {
        Self {
            monthly_trials: 50,
            conversion_rate: 30,
            tuition: 120.0,
            retention_months: 12,
        }
    }
}

impl CalculationInputs {
    /// Strict boundary check for values that did not come through the sliders.
    ///
    /// Values outside the slider ranges are accepted; only values the
    /// projection is undefined for are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.conversion_rate > 100 {
            return Err(RoiError::InvalidInput {
                field: "conversion_rate",
                reason: format!("{} is above 100%", self.conversion_rate),
            });
        }
        if !self.tuition.is_finite() {
            return Err(RoiError::InvalidInput {
                field: "tuition",
                reason: format!("{} is not a finite number", self.tuition),
            });
        }
        if self.tuition < 0.0 {
            return Err(RoiError::InvalidInput {
                field: "tuition",
                reason: format!("{} is negative", self.tuition),
            });
        }
        Ok(())
    }

    /// Parse inputs from JSON and validate them. Missing fields take defaults.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let inputs: Self = serde_json::from_reader(reader)?;
        inputs.validate()?;
        Ok(inputs)
    }

    /// Load inputs from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}
