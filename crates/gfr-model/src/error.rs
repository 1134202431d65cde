use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BaselineGfr,
    FollowUpGfr,
    TimeIntervalYears,
    SlopeType,
    AcuteEffectGfr,
    StudySize,
    Population,
    Age,
    Sex,
    Race,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::BaselineGfr => "baseline_gfr",
            Field::FollowUpGfr => "follow_up_gfr",
            Field::TimeIntervalYears => "time_interval_years",
            Field::SlopeType => "slope_type",
            Field::AcuteEffectGfr => "acute_effect_gfr",
            Field::StudySize => "study_size",
            Field::Population => "population",
            Field::Age => "age",
            Field::Sex => "sex",
            Field::Race => "race",
        }
    }

    /// Human-readable field name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::BaselineGfr => "Baseline GFR",
            Field::FollowUpGfr => "Follow-up GFR",
            Field::TimeIntervalYears => "Time interval",
            Field::SlopeType => "Slope type",
            Field::AcuteEffectGfr => "GFR at 3 months",
            Field::StudySize => "Study size",
            Field::Population => "Population",
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::Race => "Race",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-level validation failures, collected across all rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`. The first message per field is kept.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input")?;
        for (index, (field, message)) in self.fields.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Arithmetic guard failures. Unreachable for validated input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("chronic slope requires the 3-month GFR measurement")]
    MissingAcuteMeasurement,
    #[error("slope denominator must be positive, got {years} years")]
    NonPositiveInterval { years: f64 },
    #[error("{quantity} is not a finite number")]
    NonFiniteResult { quantity: &'static str },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GfrError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

pub type Result<T> = std::result::Result<T, GfrError>;
