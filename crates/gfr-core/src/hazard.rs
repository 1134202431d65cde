//! Hazard ratio estimation.
//!
//! `HR = exp(intercept + coefficient * effect)`, with coefficients from the
//! trial-level meta-regression in Inker et al. (2019), Figure 2.

use gfr_model::SlopeType;

/// Lowest hazard ratio reported.
pub const HR_MIN: f64 = 0.2;

/// Highest hazard ratio reported.
pub const HR_MAX: f64 = 1.8;

/// Exponential regression of hazard ratio on slope effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardModel {
    pub intercept: f64,
    pub coefficient: f64,
}

pub const TOTAL_SLOPE_MODEL: HazardModel = HazardModel {
    intercept: -0.05,
    coefficient: -0.42,
};

pub const CHRONIC_SLOPE_MODEL: HazardModel = HazardModel {
    intercept: 0.02,
    coefficient: -0.46,
};

impl HazardModel {
    pub fn for_slope_type(slope_type: SlopeType) -> Self {
        match slope_type {
            SlopeType::Total => TOTAL_SLOPE_MODEL,
            SlopeType::Chronic => CHRONIC_SLOPE_MODEL,
        }
    }

    /// Unclamped regression value.
    pub fn predict(&self, effect: f64) -> f64 {
        (self.intercept + self.coefficient * effect).exp()
    }
}

/// Hazard ratio for a non-negative effect, clamped to `[HR_MIN, HR_MAX]`.
pub fn estimate(effect: f64, slope_type: SlopeType) -> f64 {
    HazardModel::for_slope_type(slope_type)
        .predict(effect)
        .clamp(HR_MIN, HR_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_slope_mean_effect() {
        let hr = estimate(0.45, SlopeType::Total);
        assert!((hr - 0.7874).abs() < 1e-4, "{hr}");
    }

    #[test]
    fn larger_effect_lowers_hazard() {
        let hr = estimate(0.75, SlopeType::Total);
        assert!((hr - 0.6942).abs() < 1e-4, "{hr}");
        assert!(hr < estimate(0.45, SlopeType::Total));
    }

    #[test]
    fn chronic_uses_its_own_coefficients() {
        let hr = estimate(1.0, SlopeType::Chronic);
        assert!((hr - (0.02_f64 - 0.46).exp()).abs() < 1e-12);
        // Steeper chronic coefficient overtakes the total intercept past 1.75.
        assert!(hr > estimate(1.0, SlopeType::Total));
        assert!(estimate(2.0, SlopeType::Chronic) < estimate(2.0, SlopeType::Total));
    }

    #[test]
    fn extreme_effects_are_clamped() {
        assert_eq!(estimate(50.0, SlopeType::Total), HR_MIN);
        assert_eq!(estimate(50.0, SlopeType::Chronic), HR_MIN);
        assert!(estimate(0.0, SlopeType::Chronic) <= HR_MAX);
        assert_eq!(
            CHRONIC_SLOPE_MODEL.predict(-10.0).clamp(HR_MIN, HR_MAX),
            HR_MAX
        );
    }
}
