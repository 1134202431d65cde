//! Patient input records.
//!
//! [`RawPatientInput`] is what a form, command line or JSON file collects:
//! every value is optional text. Validation turns it into a
//! [`PatientInput`], the only shape the engine accepts.

use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{PopulationPreference, Race, Sex, SlopeType, StudySize};

/// Unvalidated patient input as collected by a caller.
///
/// Numeric fields deserialize from either JSON numbers or strings so that
/// form payloads and hand-written files are both accepted. Unknown keys are
/// rejected so a misspelled tag never falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawPatientInput {
    #[serde(
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub baseline_gfr: Option<String>,
    #[serde(
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub follow_up_gfr: Option<String>,
    #[serde(
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_interval_years: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope_type: Option<String>,
    #[serde(
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub acute_effect_gfr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
}

impl RawPatientInput {
    /// Overwrites every field that is set in `overrides`.
    pub fn overlay(&mut self, overrides: RawPatientInput) {
        fn take(target: &mut Option<String>, value: Option<String>) {
            if value.is_some() {
                *target = value;
            }
        }
        take(&mut self.baseline_gfr, overrides.baseline_gfr);
        take(&mut self.follow_up_gfr, overrides.follow_up_gfr);
        take(&mut self.time_interval_years, overrides.time_interval_years);
        take(&mut self.slope_type, overrides.slope_type);
        take(&mut self.acute_effect_gfr, overrides.acute_effect_gfr);
        take(&mut self.study_size, overrides.study_size);
        take(&mut self.population, overrides.population);
        take(&mut self.age, overrides.age);
        take(&mut self.sex, overrides.sex);
        take(&mut self.race, overrides.race);
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}

/// Optional demographic context. Reported, never used in arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: Option<f64>,
    pub sex: Option<Sex>,
    pub race: Option<Race>,
}

/// Validated patient input.
///
/// GFR values are in ml/min/1.73m², the interval in years.
/// `acute_effect_gfr` is the 3-month measurement and is set only for
/// [`SlopeType::Chronic`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    pub baseline_gfr: f64,
    pub follow_up_gfr: f64,
    pub time_interval_years: f64,
    pub slope_type: SlopeType,
    pub acute_effect_gfr: Option<f64>,
    pub study_size: StudySize,
    pub population: PopulationPreference,
    pub demographics: Demographics,
}

impl PatientInput {
    /// Total-slope input with default population and no demographics.
    pub fn total(
        baseline_gfr: f64,
        follow_up_gfr: f64,
        time_interval_years: f64,
        study_size: StudySize,
    ) -> Self {
        Self {
            baseline_gfr,
            follow_up_gfr,
            time_interval_years,
            slope_type: SlopeType::Total,
            acute_effect_gfr: None,
            study_size,
            population: PopulationPreference::default(),
            demographics: Demographics::default(),
        }
    }

    /// Chronic-slope input with default population and no demographics.
    pub fn chronic(
        baseline_gfr: f64,
        acute_effect_gfr: f64,
        follow_up_gfr: f64,
        time_interval_years: f64,
        study_size: StudySize,
    ) -> Self {
        Self {
            slope_type: SlopeType::Chronic,
            acute_effect_gfr: Some(acute_effect_gfr),
            ..Self::total(baseline_gfr, follow_up_gfr, time_interval_years, study_size)
        }
    }

    #[must_use]
    pub fn with_population(mut self, population: PopulationPreference) -> Self {
        self.population = population;
        self
    }

    #[must_use]
    pub fn with_demographics(mut self, demographics: Demographics) -> Self {
        self.demographics = demographics;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_keeps_unset_fields() {
        let mut base = RawPatientInput {
            baseline_gfr: Some("45".to_string()),
            study_size: Some("modest".to_string()),
            ..RawPatientInput::default()
        };
        base.overlay(RawPatientInput {
            baseline_gfr: Some("50".to_string()),
            follow_up_gfr: Some("48".to_string()),
            ..RawPatientInput::default()
        });
        assert_eq!(base.baseline_gfr.as_deref(), Some("50"));
        assert_eq!(base.follow_up_gfr.as_deref(), Some("48"));
        assert_eq!(base.study_size.as_deref(), Some("modest"));
    }

    #[test]
    fn chronic_constructor_sets_acute_value() {
        let input = PatientInput::chronic(45.0, 42.0, 40.0, 2.0, StudySize::Large);
        assert_eq!(input.slope_type, SlopeType::Chronic);
        assert_eq!(input.acute_effect_gfr, Some(42.0));
        assert_eq!(input.baseline_gfr, 45.0);
    }
}
