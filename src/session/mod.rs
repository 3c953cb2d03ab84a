//! Calculator session: the mutable input record and the last computed projection
//!
//! Every change replaces one field and the next read recomputes the whole
//! projection from scratch. Only the most recent input/output pair is kept.

use crate::inputs::{
    sanitize_tuition, CalculationInputs, CONVERSION_RATE_DOMAIN, MONTHLY_TRIALS_DOMAIN,
    TUITION_SLIDER_DOMAIN,
};
use crate::projection::{Projection, ProjectionEngine};
use log::{debug, warn};

/// A single control change from the input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputChange {
    MonthlyTrials(u32),
    ConversionRate(u32),
    /// Tuition from the range slider, snapped to its domain
    TuitionSlider(f64),
    /// Tuition typed into the numeric field, only clamped at zero
    TuitionEntry(f64),
    RetentionMonths(u32),
}

/// One visitor's calculator state
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    engine: ProjectionEngine,
    inputs: CalculationInputs,
    cached: Option<(CalculationInputs, Projection)>,
    recomputations: u64,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(ProjectionEngine::default())
    }
}

impl CalculatorSession {
    /// Start a session at the default inputs
    pub fn new(engine: ProjectionEngine) -> Self {
        Self::with_inputs(engine, CalculationInputs::default())
    }

    pub fn with_inputs(engine: ProjectionEngine, inputs: CalculationInputs) -> Self {
        Self {
            engine,
            inputs,
            cached: None,
            recomputations: 0,
        }
    }

    pub fn inputs(&self) -> &CalculationInputs {
        &self.inputs
    }

    /// Number of full recomputations performed so far
    pub fn recompute_count(&self) -> u64 {
        self.recomputations
    }

    pub fn set_monthly_trials(&mut self, value: u32) {
        self.inputs.monthly_trials = snap_count("monthly_trials", value, |v| {
            MONTHLY_TRIALS_DOMAIN.snap_u32(v)
        });
    }

    pub fn set_conversion_rate(&mut self, value: u32) {
        self.inputs.conversion_rate = snap_count("conversion_rate", value, |v| {
            CONVERSION_RATE_DOMAIN.snap_u32(v)
        });
    }

    pub fn set_tuition_slider(&mut self, value: f64) {
        let snapped = TUITION_SLIDER_DOMAIN.snap(value);
        if snapped != value {
            warn!("tuition slider value {value} adjusted to {snapped}");
        }
        self.inputs.tuition = snapped;
    }

    /// Direct numeric entry: any non-negative amount is kept
    pub fn enter_tuition(&mut self, value: f64) {
        let sanitized = sanitize_tuition(value);
        if sanitized != value {
            warn!("tuition entry {value} replaced with {sanitized}");
        }
        self.inputs.tuition = sanitized;
    }

    /// Stored only; the projection does not read it
    pub fn set_retention_months(&mut self, value: u32) {
        self.inputs.retention_months = value;
    }

    pub fn apply(&mut self, change: InputChange) {
        match change {
            InputChange::MonthlyTrials(v) => self.set_monthly_trials(v),
            InputChange::ConversionRate(v) => self.set_conversion_rate(v),
            InputChange::TuitionSlider(v) => self.set_tuition_slider(v),
            InputChange::TuitionEntry(v) => self.enter_tuition(v),
            InputChange::RetentionMonths(v) => self.set_retention_months(v),
        }
    }

    /// Projection for the current inputs.
    /// Recomputes only when the inputs differ from the last computed set.
    pub fn projection(&mut self) -> &Projection {
        let stale = match &self.cached {
            Some((inputs, _)) => *inputs != self.inputs,
            None => true,
        };

        if stale {
            self.cached = None;
        } else {
            debug!("inputs unchanged, reusing last projection");
        }

        let engine = &self.engine;
        let inputs = self.inputs;
        let recomputations = &mut self.recomputations;
        let (_, projection) = self.cached.get_or_insert_with(|| {
            *recomputations += 1;
            (inputs, engine.project(&inputs))
        });
        projection
    }
}

fn snap_count(field: &str, value: u32, snap: impl Fn(u32) -> u32) -> u32 {
    let snapped = snap(value);
    if snapped != value {
        warn!("{field} value {value} adjusted to {snapped}");
    }
    snapped
}
