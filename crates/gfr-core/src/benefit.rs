//! Benefit tier classification.

use gfr_model::BenefitTier;

/// Fraction of the threshold at which the Moderate tier starts.
pub const MODERATE_FRACTION: f64 = 0.7;

/// Fraction of the threshold at which the Low tier starts.
pub const LOW_FRACTION: f64 = 0.5;

/// Buckets a treatment effect (slope magnitude) against `threshold`.
///
/// Bands are checked from the top; the first match wins.
pub fn classify(effect: f64, threshold: f64) -> BenefitTier {
    if effect >= threshold {
        BenefitTier::High
    } else if effect >= threshold * MODERATE_FRACTION {
        BenefitTier::Moderate
    } else if effect >= threshold * LOW_FRACTION {
        BenefitTier::Low
    } else {
        BenefitTier::Minimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_threshold_fractions() {
        assert_eq!(classify(1.91, 1.32), BenefitTier::High);
        assert_eq!(classify(0.48, 0.48), BenefitTier::High);
        assert_eq!(classify(0.45, 0.48), BenefitTier::Moderate);
        assert_eq!(classify(0.30, 0.48), BenefitTier::Low);
        assert_eq!(classify(0.24, 0.48), BenefitTier::Low);
        assert_eq!(classify(0.2399, 0.48), BenefitTier::Minimal);
        assert_eq!(classify(0.0, 0.48), BenefitTier::Minimal);
    }
}
