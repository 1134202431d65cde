//! Input validation.
//!
//! Every rule runs independently and all violations are collected, so a
//! caller can show one message per field in a single pass. No computation
//! happens until validation succeeds.

use std::ops::RangeInclusive;
use std::str::FromStr;

use tracing::debug;

use gfr_model::{
    Demographics, Field, PatientInput, PopulationPreference, Race, RawPatientInput, Sex,
    SlopeType, StudySize, ValidationErrors,
};

/// Accepted GFR range in ml/min/1.73m².
pub const GFR_RANGE: RangeInclusive<f64> = 5.0..=150.0;

/// Accepted follow-up interval in years.
pub const INTERVAL_RANGE: RangeInclusive<f64> = 0.5..=5.0;

/// Accepted age in years, when supplied.
pub const AGE_RANGE: RangeInclusive<f64> = 0.0..=120.0;

const ACUTE_REQUIRED_MESSAGE: &str = "GFR at 3 months required for chronic slope calculation";

/// Parses a string as f64, returning None for empty strings.
fn parse_number(value: &str) -> Option<Result<f64, ()>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.parse::<f64>().map_err(|_| ()))
}

/// Outcome of checking one field: the parsed value or its message.
type Checked<T> = Result<T, String>;

/// Validates a required number against `range`.
///
/// Non-finite values never satisfy a range check and are reported as out
/// of range.
fn required_number(
    field: Field,
    value: Option<&str>,
    range: &RangeInclusive<f64>,
    range_message: &str,
) -> Checked<f64> {
    match value.and_then(parse_number) {
        None => Err(format!("{} is required", field.label())),
        Some(Err(())) => Err(format!("{} must be a number", field.label())),
        Some(Ok(number)) if !range.contains(&number) => Err(range_message.to_string()),
        Some(Ok(number)) => Ok(number),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|tag| !tag.is_empty())
}

/// Parses an optional tag, falling back to `default` when absent.
fn tag_or_default<T: FromStr<Err = String>>(value: Option<&str>, default: T) -> Checked<T> {
    non_blank(value).map_or(Ok(default), str::parse)
}

/// Parses an optional tag that has no default.
fn optional_tag<T: FromStr<Err = String>>(value: Option<&str>) -> Checked<Option<T>> {
    non_blank(value).map(str::parse).transpose()
}

fn optional_age(value: Option<&str>) -> Checked<Option<f64>> {
    match value.and_then(parse_number) {
        None => Ok(None),
        Some(Ok(age)) if AGE_RANGE.contains(&age) => Ok(Some(age)),
        Some(Ok(_)) => Err("Age must be between 0-120 years".to_string()),
        Some(Err(())) => Err("Age must be a number".to_string()),
    }
}

/// The 3-month value is only consulted for chronic slopes.
fn acute_measurement(slope_type: &Checked<SlopeType>, value: Option<&str>) -> Checked<Option<f64>> {
    match slope_type {
        Ok(kind) if kind.requires_acute_measurement() => value
            .and_then(parse_number)
            .and_then(Result::ok)
            .filter(|gfr| GFR_RANGE.contains(gfr))
            .map(Some)
            .ok_or_else(|| ACUTE_REQUIRED_MESSAGE.to_string()),
        _ => Ok(None),
    }
}

fn record<T>(errors: &mut ValidationErrors, field: Field, checked: &Checked<T>) {
    if let Err(message) = checked {
        errors.insert(field, message.as_str());
    }
}

/// Validates raw caller input.
///
/// Returns the typed record, or every field-level violation found. Never
/// both.
///
/// # Errors
///
/// Returns [`ValidationErrors`] when any field is missing, non-numeric,
/// out of range or carries an unknown tag. The map is never empty.
pub fn validate(raw: &RawPatientInput) -> Result<PatientInput, ValidationErrors> {
    let baseline_gfr = required_number(
        Field::BaselineGfr,
        raw.baseline_gfr.as_deref(),
        &GFR_RANGE,
        "Baseline GFR must be between 5-150 ml/min/1.73m²",
    );
    let follow_up_gfr = required_number(
        Field::FollowUpGfr,
        raw.follow_up_gfr.as_deref(),
        &GFR_RANGE,
        "Follow-up GFR must be between 5-150 ml/min/1.73m²",
    );
    let time_interval_years = required_number(
        Field::TimeIntervalYears,
        raw.time_interval_years.as_deref(),
        &INTERVAL_RANGE,
        "Time interval must be between 0.5-5 years",
    );
    let slope_type = tag_or_default(raw.slope_type.as_deref(), SlopeType::default());
    let acute_effect_gfr = acute_measurement(&slope_type, raw.acute_effect_gfr.as_deref());
    let study_size = tag_or_default(raw.study_size.as_deref(), StudySize::default());
    let population = tag_or_default(
        raw.population.as_deref(),
        PopulationPreference::default(),
    );
    let age = optional_age(raw.age.as_deref());
    let sex = optional_tag::<Sex>(raw.sex.as_deref());
    let race = optional_tag::<Race>(raw.race.as_deref());

    match (
        &baseline_gfr,
        &follow_up_gfr,
        &time_interval_years,
        &slope_type,
        &acute_effect_gfr,
        &study_size,
        &population,
        &age,
        &sex,
        &race,
    ) {
        (
            Ok(baseline_gfr),
            Ok(follow_up_gfr),
            Ok(time_interval_years),
            Ok(slope_type),
            Ok(acute_effect_gfr),
            Ok(study_size),
            Ok(population),
            Ok(age),
            Ok(sex),
            Ok(race),
        ) => Ok(PatientInput {
            baseline_gfr: *baseline_gfr,
            follow_up_gfr: *follow_up_gfr,
            time_interval_years: *time_interval_years,
            slope_type: *slope_type,
            acute_effect_gfr: *acute_effect_gfr,
            study_size: *study_size,
            population: *population,
            demographics: Demographics {
                age: *age,
                sex: *sex,
                race: *race,
            },
        }),
        // At least one field failed, so the map below is non-empty.
        _ => {
            let mut errors = ValidationErrors::new();
            record(&mut errors, Field::BaselineGfr, &baseline_gfr);
            record(&mut errors, Field::FollowUpGfr, &follow_up_gfr);
            record(&mut errors, Field::TimeIntervalYears, &time_interval_years);
            record(&mut errors, Field::SlopeType, &slope_type);
            record(&mut errors, Field::AcuteEffectGfr, &acute_effect_gfr);
            record(&mut errors, Field::StudySize, &study_size);
            record(&mut errors, Field::Population, &population);
            record(&mut errors, Field::Age, &age);
            record(&mut errors, Field::Sex, &sex);
            record(&mut errors, Field::Race, &race);
            debug!(field_count = errors.len(), "patient input rejected");
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(baseline: &str, follow_up: &str, interval: &str) -> RawPatientInput {
        RawPatientInput {
            baseline_gfr: Some(baseline.to_string()),
            follow_up_gfr: Some(follow_up.to_string()),
            time_interval_years: Some(interval.to_string()),
            ..RawPatientInput::default()
        }
    }

    #[test]
    fn accepts_total_slope_with_defaults() {
        let input = validate(&raw("35", "36.35", "3")).expect("valid input");
        assert_eq!(input.baseline_gfr, 35.0);
        assert_eq!(input.follow_up_gfr, 36.35);
        assert_eq!(input.time_interval_years, 3.0);
        assert_eq!(input.slope_type, SlopeType::Total);
        assert_eq!(input.study_size, StudySize::Large);
        assert_eq!(input.population, PopulationPreference::Auto);
        assert_eq!(input.acute_effect_gfr, None);
    }

    #[test]
    fn collects_every_violation() {
        let errors = validate(&RawPatientInput::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::BaselineGfr), Some("Baseline GFR is required"));
        assert_eq!(
            errors.get(Field::FollowUpGfr),
            Some("Follow-up GFR is required")
        );
        assert_eq!(
            errors.get(Field::TimeIntervalYears),
            Some("Time interval is required")
        );
    }

    #[test]
    fn reports_range_and_parse_failures() {
        let errors = validate(&raw("4.9", "abc", "5.01")).unwrap_err();
        assert_eq!(
            errors.get(Field::BaselineGfr),
            Some("Baseline GFR must be between 5-150 ml/min/1.73m²")
        );
        assert_eq!(
            errors.get(Field::FollowUpGfr),
            Some("Follow-up GFR must be a number")
        );
        assert_eq!(
            errors.get(Field::TimeIntervalYears),
            Some("Time interval must be between 0.5-5 years")
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(validate(&raw("5", "150", "0.5")).is_ok());
        assert!(validate(&raw("150", "5", "5")).is_ok());
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let errors = validate(&raw("NaN", "inf", "2")).unwrap_err();
        assert!(errors.contains(Field::BaselineGfr));
        assert!(errors.contains(Field::FollowUpGfr));
    }

    #[test]
    fn chronic_requires_acute_measurement() {
        let mut input = raw("45", "40", "2");
        input.slope_type = Some("chronic".to_string());
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.get(Field::AcuteEffectGfr),
            Some(ACUTE_REQUIRED_MESSAGE)
        );

        input.acute_effect_gfr = Some("151".to_string());
        assert!(validate(&input).unwrap_err().contains(Field::AcuteEffectGfr));

        input.acute_effect_gfr = Some("42".to_string());
        let valid = validate(&input).expect("valid chronic input");
        assert_eq!(valid.acute_effect_gfr, Some(42.0));
    }

    #[test]
    fn total_slope_ignores_acute_measurement() {
        let mut input = raw("45", "40", "2");
        input.acute_effect_gfr = Some("not a number".to_string());
        let valid = validate(&input).expect("acute value ignored for total slope");
        assert_eq!(valid.acute_effect_gfr, None);
    }

    #[test]
    fn unknown_tags_are_reported() {
        let mut input = raw("45", "40", "2");
        input.slope_type = Some("acute".to_string());
        input.study_size = Some("huge".to_string());
        input.population = Some("martian".to_string());
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.get(Field::SlopeType),
            Some("Unknown slope type: acute")
        );
        assert_eq!(errors.get(Field::StudySize), Some("Unknown study size: huge"));
        assert_eq!(
            errors.get(Field::Population),
            Some("Unknown population: martian")
        );
        assert!(!errors.contains(Field::AcuteEffectGfr));
    }

    #[test]
    fn demographics_are_optional_but_checked() {
        let mut input = raw("45", "40", "2");
        input.age = Some("68".to_string());
        input.sex = Some("female".to_string());
        input.race = Some("other".to_string());
        let valid = validate(&input).expect("valid demographics");
        assert_eq!(valid.demographics.age, Some(68.0));
        assert_eq!(valid.demographics.sex, Some(Sex::Female));
        assert_eq!(valid.demographics.race, Some(Race::Other));

        input.age = Some("-3".to_string());
        input.sex = Some("x".to_string());
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.get(Field::Age),
            Some("Age must be between 0-120 years")
        );
        assert_eq!(errors.get(Field::Sex), Some("Unknown sex: x"));
    }

    #[test]
    fn rejection_always_names_a_field() {
        let mut input = raw("45", "40", "2");
        input.race = Some("unknown".to_string());
        let errors = validate(&input).unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Race), Some("Unknown race: unknown"));
    }

    #[test]
    fn blank_strings_count_as_missing() {
        let errors = validate(&raw("  ", "40", "2")).unwrap_err();
        assert_eq!(errors.get(Field::BaselineGfr), Some("Baseline GFR is required"));
    }
}
