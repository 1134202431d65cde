//! GFR slope arithmetic.

use gfr_model::{ComputationError, PatientInput, SlopeResult, SlopeType};

/// Length of the acute-effect window excluded from chronic slopes (3 months).
pub const ACUTE_WINDOW_YEARS: f64 = 0.25;

/// Smallest denominator a chronic slope may use.
pub const MIN_CHRONIC_YEARS: f64 = 0.25;

/// Years covered by a chronic slope: the interval minus the acute window,
/// floored at [`MIN_CHRONIC_YEARS`].
pub fn chronic_years(time_interval_years: f64) -> f64 {
    (time_interval_years - ACUTE_WINDOW_YEARS).max(MIN_CHRONIC_YEARS)
}

fn rate(from_gfr: f64, to_gfr: f64, years: f64) -> Result<f64, ComputationError> {
    if !(years.is_finite() && years > 0.0) {
        return Err(ComputationError::NonPositiveInterval { years });
    }
    let slope = (to_gfr - from_gfr) / years;
    if !slope.is_finite() {
        return Err(ComputationError::NonFiniteResult { quantity: "GFR slope" });
    }
    Ok(slope)
}

/// Total slope from baseline to follow-up.
///
/// # Errors
///
/// Fails when `years` is not a positive finite number.
pub fn total_slope(
    baseline_gfr: f64,
    follow_up_gfr: f64,
    years: f64,
) -> Result<f64, ComputationError> {
    rate(baseline_gfr, follow_up_gfr, years)
}

/// Chronic slope from the 3-month measurement to follow-up.
///
/// # Errors
///
/// Fails when the GFR values produce a non-finite slope.
pub fn chronic_slope(
    acute_effect_gfr: f64,
    follow_up_gfr: f64,
    time_interval_years: f64,
) -> Result<f64, ComputationError> {
    rate(acute_effect_gfr, follow_up_gfr, chronic_years(time_interval_years))
}

/// Computes the signed slope for `input` according to its slope type.
///
/// # Errors
///
/// Returns a [`ComputationError`] when a chronic input carries no 3-month
/// value or the interval is not a positive finite number.
pub fn compute_slope(input: &PatientInput) -> Result<SlopeResult, ComputationError> {
    match input.slope_type {
        SlopeType::Total => {
            let years = input.time_interval_years;
            let value = total_slope(input.baseline_gfr, input.follow_up_gfr, years)?;
            Ok(SlopeResult {
                value,
                label: format!("Total slope over {years} years"),
                slope_type: SlopeType::Total,
                denominator_years: years,
            })
        }
        SlopeType::Chronic => {
            let years = input.time_interval_years;
            if !(years.is_finite() && years > 0.0) {
                return Err(ComputationError::NonPositiveInterval { years });
            }
            let acute = input
                .acute_effect_gfr
                .ok_or(ComputationError::MissingAcuteMeasurement)?;
            let value = chronic_slope(acute, input.follow_up_gfr, years)?;
            Ok(SlopeResult {
                value,
                label: "Chronic slope (from 3 months)".to_string(),
                slope_type: SlopeType::Chronic,
                denominator_years: chronic_years(years),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfr_model::StudySize;

    #[test]
    fn total_slope_is_signed() {
        let decline = total_slope(45.0, 43.09, 1.0).unwrap();
        assert!((decline - -1.91).abs() < 1e-9);
        let rise = total_slope(35.0, 36.35, 3.0).unwrap();
        assert!((rise - 0.45).abs() < 1e-9);
    }

    #[test]
    fn chronic_years_reserves_acute_window() {
        assert_eq!(chronic_years(2.0), 1.75);
        assert_eq!(chronic_years(0.5), 0.25);
        assert_eq!(chronic_years(0.3), 0.25);
        assert_eq!(chronic_years(0.0), 0.25);
    }

    #[test]
    fn chronic_slope_starts_at_three_months() {
        let input = PatientInput::chronic(45.0, 42.0, 40.0, 2.0, StudySize::Large);
        let slope = compute_slope(&input).unwrap();
        assert!((slope.value - (-2.0 / 1.75)).abs() < 1e-12);
        assert_eq!(slope.denominator_years, 1.75);
        assert_eq!(slope.label, "Chronic slope (from 3 months)");
    }

    #[test]
    fn total_label_reports_interval() {
        let input = PatientInput::total(35.0, 36.35, 3.0, StudySize::Large);
        assert_eq!(compute_slope(&input).unwrap().label, "Total slope over 3 years");
        let input = PatientInput::total(35.0, 36.35, 2.5, StudySize::Large);
        assert_eq!(compute_slope(&input).unwrap().label, "Total slope over 2.5 years");
    }

    #[test]
    fn zero_interval_is_a_computation_error() {
        let input = PatientInput::total(35.0, 36.0, 0.0, StudySize::Large);
        assert_eq!(
            compute_slope(&input),
            Err(ComputationError::NonPositiveInterval { years: 0.0 })
        );
    }

    #[test]
    fn chronic_rejects_non_finite_or_zero_interval() {
        let input = PatientInput::chronic(45.0, 42.0, 40.0, f64::NAN, StudySize::Large);
        assert!(matches!(
            compute_slope(&input),
            Err(ComputationError::NonPositiveInterval { years }) if years.is_nan()
        ));
        let input = PatientInput::chronic(45.0, 42.0, 40.0, 0.0, StudySize::Large);
        assert_eq!(
            compute_slope(&input),
            Err(ComputationError::NonPositiveInterval { years: 0.0 })
        );
    }

    #[test]
    fn chronic_without_acute_value_is_rejected() {
        let mut input = PatientInput::chronic(45.0, 42.0, 40.0, 2.0, StudySize::Large);
        input.acute_effect_gfr = None;
        assert_eq!(
            compute_slope(&input),
            Err(ComputationError::MissingAcuteMeasurement)
        );
    }
}
