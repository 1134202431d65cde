use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use gfr_model::{
    Assessment, GfrError, PopulationPreference, Race, RawPatientInput, Sex, SlopeType, StudySize,
    ValidationErrors,
};

use crate::cli::AssessArgs;
use crate::config::Settings;

/// Result of the `assess` command.
#[derive(Debug)]
pub enum AssessOutcome {
    Assessed(Box<Assessment>),
    Rejected(ValidationErrors),
}

/// Reads a [`RawPatientInput`] JSON file.
pub fn read_input_file(path: &Path) -> Result<RawPatientInput> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse input {}", path.display()))
}

/// Collects raw input. Flags override the JSON file; settings only fill
/// tags that neither supplies.
pub fn build_raw_input(args: &AssessArgs, settings: &Settings) -> Result<RawPatientInput> {
    let mut raw = match &args.input {
        Some(path) => read_input_file(path)?,
        None => RawPatientInput::default(),
    };
    raw.overlay(flag_input(args));
    settings.apply_defaults(&mut raw);
    Ok(raw)
}

fn flag_input(args: &AssessArgs) -> RawPatientInput {
    RawPatientInput {
        baseline_gfr: args.baseline.clone(),
        follow_up_gfr: args.follow_up.clone(),
        time_interval_years: args.interval.clone(),
        slope_type: args
            .slope_type
            .map(|value| SlopeType::from(value).as_str().to_string()),
        acute_effect_gfr: args.acute.clone(),
        study_size: args
            .study_size
            .map(|value| StudySize::from(value).as_str().to_string()),
        population: args
            .population
            .map(|value| PopulationPreference::from(value).as_str().to_string()),
        age: args.age.clone(),
        sex: args.sex.map(|value| Sex::from(value).as_str().to_string()),
        race: args.race.map(|value| Race::from(value).as_str().to_string()),
    }
}

pub fn run_assess(args: &AssessArgs, settings: &Settings) -> Result<AssessOutcome> {
    let span = info_span!("assess_command");
    let _guard = span.enter();
    let start = Instant::now();

    let raw = build_raw_input(args, settings)?;
    debug!(
        from_file = args.input.is_some(),
        slope_type = raw.slope_type.as_deref().unwrap_or("default"),
        study_size = raw.study_size.as_deref().unwrap_or("default"),
        "input collected"
    );

    let outcome = match gfr_core::assess_raw(&raw) {
        Ok(assessment) => {
            info!(
                tier = %assessment.interpretation.benefit_tier,
                risk_level = %assessment.interpretation.risk_level,
                duration_us = start.elapsed().as_micros(),
                "assessment complete"
            );
            AssessOutcome::Assessed(Box::new(assessment))
        }
        Err(GfrError::Validation(errors)) => {
            info!(field_count = errors.len(), "input rejected");
            AssessOutcome::Rejected(errors)
        }
        Err(GfrError::Computation(error)) => bail!("assessment failed: {error}"),
    };
    Ok(outcome)
}
