//! Slider domains and the clamping the input layer applies before projecting

/// Range and step of an interactive control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Monthly trials slider: 20 to 100 in steps of 5
pub const MONTHLY_TRIALS_DOMAIN: InputDomain = InputDomain { min: 20.0, max: 100.0, step: 5.0 };

/// Conversion rate slider (percent): 10 to 70 in steps of 5
pub const CONVERSION_RATE_DOMAIN: InputDomain = InputDomain { min: 10.0, max: 70.0, step: 5.0 };

/// Tuition slider: 50 to 300 in steps of 5.
/// Direct numeric entry is not bound by this range, see [`sanitize_tuition`].
pub const TUITION_SLIDER_DOMAIN: InputDomain = InputDomain { min: 50.0, max: 300.0, step: 5.0 };

impl InputDomain {
    /// Clamp a value into [min, max]. NaN falls to `min`; infinities clamp
    /// to the bound on their side.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Clamp, then round to the nearest step counted from `min`
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Integer form of [`InputDomain::snap`] for count-valued controls
    pub fn snap_u32(&self, value: u32) -> u32 {
        self.snap(value as f64) as u32
    }

    /// Slider fill position in percent of the track
    pub fn fill_percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.min) / span * 100.0
    }

    /// Number of discrete positions on the control
    pub fn positions(&self) -> usize {
        if self.step <= 0.0 {
            return 1;
        }
        ((self.max - self.min) / self.step).floor() as usize + 1
    }

    /// Every discrete position from `min` to `max`
    pub fn values(&self) -> Vec<f64> {
        (0..self.positions())
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }
}

/// Tuition typed into the numeric field: only the lower bound of 0 applies.
/// Non-finite entries (unparseable text) become 0.
pub fn sanitize_tuition(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(MONTHLY_TRIALS_DOMAIN.clamp(5.0), 20.0);
        assert_eq!(MONTHLY_TRIALS_DOMAIN.clamp(150.0), 100.0);
        assert_eq!(MONTHLY_TRIALS_DOMAIN.clamp(55.0), 55.0);
        assert_eq!(CONVERSION_RATE_DOMAIN.clamp(f64::NAN), 10.0);
    }

    #[test]
    fn test_clamp_infinities_to_nearest_bound() {
        assert_eq!(TUITION_SLIDER_DOMAIN.clamp(f64::INFINITY), 300.0);
        assert_eq!(TUITION_SLIDER_DOMAIN.clamp(f64::NEG_INFINITY), 50.0);
        assert_eq!(TUITION_SLIDER_DOMAIN.snap(f64::INFINITY), 300.0);
    }

    #[test]
    fn test_snap_to_step() {
        assert_eq!(MONTHLY_TRIALS_DOMAIN.snap_u32(52), 50);
        assert_eq!(MONTHLY_TRIALS_DOMAIN.snap_u32(53), 55);
        assert_eq!(CONVERSION_RATE_DOMAIN.snap_u32(3), 10);
        assert_eq!(CONVERSION_RATE_DOMAIN.snap_u32(99), 70);
        assert_eq!(TUITION_SLIDER_DOMAIN.snap(121.0), 120.0);
        assert_eq!(TUITION_SLIDER_DOMAIN.snap(1_000.0), 300.0);
    }

    #[test]
    fn test_fill_percent() {
        assert_relative_eq!(MONTHLY_TRIALS_DOMAIN.fill_percent(50.0), 37.5);
        assert_relative_eq!(CONVERSION_RATE_DOMAIN.fill_percent(10.0), 0.0);
        assert_relative_eq!(TUITION_SLIDER_DOMAIN.fill_percent(300.0), 100.0);
    }

    #[test]
    fn test_positions() {
        assert_eq!(MONTHLY_TRIALS_DOMAIN.positions(), 17);
        assert_eq!(CONVERSION_RATE_DOMAIN.positions(), 13);
        assert_eq!(TUITION_SLIDER_DOMAIN.positions(), 51);
        let rates = CONVERSION_RATE_DOMAIN.values();
        assert_eq!(rates.first().copied(), Some(10.0));
        assert_eq!(rates.last().copied(), Some(70.0));
    }

    #[test]
    fn test_sanitize_tuition() {
        assert_eq!(sanitize_tuition(-25.0), 0.0);
        assert_eq!(sanitize_tuition(f64::NAN), 0.0);
        assert_eq!(sanitize_tuition(f64::INFINITY), 0.0);
        assert_eq!(sanitize_tuition(450.0), 450.0);
    }
}
