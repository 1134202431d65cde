//! Clinical interpretation of a computed slope.

use gfr_model::{Interpretation, PatientInput, SlopeResult};

use crate::{benefit, hazard, threshold};

/// Resolves the threshold, classifies the benefit tier and estimates the
/// hazard ratio for `slope`.
pub fn interpret(slope: &SlopeResult, input: &PatientInput) -> Interpretation {
    let resolved = threshold::resolve(
        input.slope_type,
        input.time_interval_years,
        input.study_size,
    );
    let effect = slope.effect();
    let tier = benefit::classify(effect, resolved.value);
    Interpretation {
        benefit_tier: tier,
        assessment: tier.assessment().to_string(),
        benefit_probability_percent: tier.probability_percent(),
        hazard_ratio: hazard::estimate(effect, input.slope_type),
        risk_level: tier.risk_level(),
        threshold_used: resolved.value,
        threshold_key: resolved.key,
    }
}
