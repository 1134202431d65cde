//! Derived result records.
//!
//! All values are full precision; display rounding belongs to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{
    AgeGroup, BenefitTier, PopulationPreference, ProgressionRate, RiskLevel, SlopeType,
};

/// Row of the benefit threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThresholdKey {
    /// Total slope, follow-up of at least 2.5 years.
    #[serde(rename = "total_3yr")]
    Total3yr,
    /// Total slope, follow-up from 1.5 up to 2.5 years.
    #[serde(rename = "total_2yr")]
    Total2yr,
    /// Total slope, follow-up under 1.5 years.
    #[serde(rename = "total_1yr")]
    Total1yr,
    /// Chronic slope, any follow-up.
    #[serde(rename = "chronic")]
    Chronic,
}

impl ThresholdKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdKey::Total3yr => "total_3yr",
            ThresholdKey::Total2yr => "total_2yr",
            ThresholdKey::Total1yr => "total_1yr",
            ThresholdKey::Chronic => "chronic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThresholdKey::Total3yr => "Total slope, 3-year follow-up",
            ThresholdKey::Total2yr => "Total slope, 2-year follow-up",
            ThresholdKey::Total1yr => "Total slope, 1-year follow-up",
            ThresholdKey::Chronic => "Chronic slope",
        }
    }
}

impl fmt::Display for ThresholdKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// GFR slope in ml/min/1.73m²/year. Negative values indicate decline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopeResult {
    pub value: f64,
    pub label: String,
    pub slope_type: SlopeType,
    /// Years the GFR difference was divided by.
    pub denominator_years: f64,
}

impl SlopeResult {
    /// Magnitude used as the treatment effect.
    pub fn effect(&self) -> f64 {
        self.value.abs()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub benefit_tier: BenefitTier,
    pub assessment: String,
    pub benefit_probability_percent: f64,
    /// Estimated hazard ratio, within `[0.2, 1.8]`.
    pub hazard_ratio: f64,
    pub risk_level: RiskLevel,
    pub threshold_used: f64,
    pub threshold_key: ThresholdKey,
}

/// Projected time until GFR reaches 15 ml/min/1.73m².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum YearsToEndStage {
    Years(f64),
    /// Flat slope, no progression projected.
    NoProgression,
    /// Baseline GFR is already at or below 15.
    AlreadyAtRisk,
}

impl YearsToEndStage {
    pub fn years(&self) -> Option<f64> {
        match self {
            YearsToEndStage::Years(years) => Some(*years),
            _ => None,
        }
    }
}

impl fmt::Display for YearsToEndStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearsToEndStage::Years(years) => write!(f, "{years:.1} years"),
            YearsToEndStage::NoProgression => write!(f, "No progression projected"),
            YearsToEndStage::AlreadyAtRisk => write!(f, "Already at risk"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prognosis {
    pub progression_rate: ProgressionRate,
    pub annual_decline: f64,
    pub years_to_end_stage: YearsToEndStage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientContext {
    pub baseline_gfr: f64,
    pub current_gfr: f64,
    pub time_interval_years: f64,
    pub age_group: Option<AgeGroup>,
    pub population: PopulationPreference,
}

/// Complete result of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub slope: SlopeResult,
    pub interpretation: Interpretation,
    pub prognosis: Prognosis,
    pub context: PatientContext,
}
