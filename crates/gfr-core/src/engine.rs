//! End-to-end assessment.
//!
//! [`assess`] runs the slope, interpretation and prognosis stages on a
//! validated input. [`assess_raw`] validates first. Both are pure: identical
//! input yields identical output.

use tracing::{debug, debug_span, trace};

use gfr_model::{Assessment, ComputationError, GfrError, PatientInput, RawPatientInput};

use crate::context::patient_context;
use crate::interpret::interpret;
use crate::phi::Redacted;
use crate::prognosis;
use crate::slope::compute_slope;
use crate::validate::validate;

/// Runs every computation stage on `input`.
///
/// # Errors
///
/// Returns a [`ComputationError`] only for inputs that bypassed
/// validation (zero interval, chronic slope without a 3-month value).
pub fn assess(input: &PatientInput) -> Result<Assessment, ComputationError> {
    let span = debug_span!(
        "assess",
        slope_type = %input.slope_type,
        study_size = %input.study_size,
        population = %input.population
    );
    let _guard = span.enter();
    trace!(
        baseline_gfr = %Redacted(input.baseline_gfr),
        follow_up_gfr = %Redacted(input.follow_up_gfr),
        time_interval_years = input.time_interval_years,
        "patient input"
    );

    let slope = compute_slope(input)?;
    debug!(
        slope = %Redacted(slope.value),
        denominator_years = slope.denominator_years,
        "slope computed"
    );

    let interpretation = interpret(&slope, input);
    if !interpretation.hazard_ratio.is_finite() {
        return Err(ComputationError::NonFiniteResult {
            quantity: "hazard ratio",
        });
    }
    debug!(
        threshold_key = %interpretation.threshold_key,
        threshold = interpretation.threshold_used,
        tier = %interpretation.benefit_tier,
        risk_level = %interpretation.risk_level,
        "slope interpreted"
    );

    let prognosis = prognosis::project(slope.value, input.baseline_gfr);
    debug!(
        progression_rate = %prognosis.progression_rate,
        "prognosis projected"
    );

    Ok(Assessment {
        slope,
        interpretation,
        prognosis,
        context: patient_context(input),
    })
}

/// Validates raw caller input, then assesses it.
///
/// # Errors
///
/// Returns [`GfrError::Validation`] with every field-level
/// violation, or [`GfrError::Computation`] from [`assess`].
pub fn assess_raw(raw: &RawPatientInput) -> gfr_model::Result<Assessment> {
    let input = validate(raw)?;
    assess(&input).map_err(GfrError::from)
}
