//! Type-safe enumerations for GFR slope assessment.
//!
//! Form and command-line layers hand these concepts over as string tags
//! (`total`, `chronic`, `large`, ...). Each enum parses its tag
//! case-insensitively and serializes back to the canonical lowercase tag.
//!
//! # Clinical Reference
//!
//! - Slope types and study-size columns: Inker et al. (2019), Table 3
//!   (97.5% PPV thresholds for clinical benefit)
//! - Hazard ratio coefficients: Inker et al. (2019), Figure 2 meta-regression

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Basis used to compute the GFR slope.
///
/// - **Total**: from the baseline measurement to follow-up.
/// - **Chronic**: from the 3-month measurement to follow-up, excluding the
///   acute hemodynamic effect of treatment initiation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopeType {
    #[default]
    Total,
    Chronic,
}

impl SlopeType {
    /// Returns the canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlopeType::Total => "total",
            SlopeType::Chronic => "chronic",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SlopeType::Total => "Total slope (from baseline)",
            SlopeType::Chronic => "Chronic slope (from 3 months)",
        }
    }

    /// Returns true if this slope type needs the 3-month measurement.
    pub fn requires_acute_measurement(&self) -> bool {
        matches!(self, SlopeType::Chronic)
    }
}

impl fmt::Display for SlopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SlopeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" => Ok(SlopeType::Total),
            "chronic" => Ok(SlopeType::Chronic),
            _ => Err(format!("Unknown slope type: {s}")),
        }
    }
}

/// Study-size assumption selecting the threshold column.
///
/// The published thresholds shrink as the assumed trial gets larger, since
/// a larger trial estimates the slope difference more precisely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudySize {
    /// Large trial (N~1900).
    #[default]
    Large,
    /// Modest trial (N~720).
    Modest,
    /// Infinite sample size (no estimation error).
    Infinite,
}

impl StudySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudySize::Large => "large",
            StudySize::Modest => "modest",
            StudySize::Infinite => "infinite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudySize::Large => "Large study (N~1900)",
            StudySize::Modest => "Modest study (N~720)",
            StudySize::Infinite => "Infinite sample size",
        }
    }
}

impl fmt::Display for StudySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StudySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "large" => Ok(StudySize::Large),
            "modest" => Ok(StudySize::Modest),
            "infinite" => Ok(StudySize::Infinite),
            _ => Err(format!("Unknown study size: {s}")),
        }
    }
}

/// Requested population dataset.
///
/// Only the Western (Inker meta-analysis) coefficients are implemented.
/// The preference is validated and echoed in results but does not change
/// any threshold or coefficient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationPreference {
    #[default]
    Auto,
    Western,
    Asian,
}

impl PopulationPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopulationPreference::Auto => "auto",
            PopulationPreference::Western => "western",
            PopulationPreference::Asian => "asian",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PopulationPreference::Auto => "Auto",
            PopulationPreference::Western => "Western (Inker Meta-Analysis)",
            PopulationPreference::Asian => "Asian (CKD-JAC Study)",
        }
    }
}

impl fmt::Display for PopulationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PopulationPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(PopulationPreference::Auto),
            "western" => Ok(PopulationPreference::Western),
            "asian" => Ok(PopulationPreference::Asian),
            _ => Err(format!("Unknown population: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            _ => Err(format!("Unknown sex: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    White,
    Black,
    Other,
}

impl Race {
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::White => "white",
            Race::Black => "black",
            Race::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Race::White => "White/Caucasian",
            Race::Black => "Black/African American",
            Race::Other => "Asian/Other",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Race {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "white" => Ok(Race::White),
            "black" => Ok(Race::Black),
            "other" | "asian" => Ok(Race::Other),
            _ => Err(format!("Unknown race: {s}")),
        }
    }
}

/// Benefit tier assigned by comparing slope magnitude to the threshold.
///
/// Only [`BenefitTier::High`] corresponds to the published 97.5% PPV
/// threshold. The Moderate and Low bands are linear de-ratings of it and
/// their probabilities are qualitative, not calibrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenefitTier {
    Minimal,
    Low,
    Moderate,
    High,
}

impl BenefitTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitTier::High => "high",
            BenefitTier::Moderate => "moderate",
            BenefitTier::Low => "low",
            BenefitTier::Minimal => "minimal",
        }
    }

    /// Point probability of clinical benefit, in percent.
    pub fn probability_percent(&self) -> f64 {
        match self {
            BenefitTier::High => 97.5,
            BenefitTier::Moderate => 85.0,
            BenefitTier::Low => 60.0,
            BenefitTier::Minimal => 30.0,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            BenefitTier::High => RiskLevel::Low,
            BenefitTier::Moderate | BenefitTier::Low => RiskLevel::Moderate,
            BenefitTier::Minimal => RiskLevel::High,
        }
    }

    /// Clinical assessment sentence for reports.
    pub fn assessment(&self) -> &'static str {
        match self {
            BenefitTier::High => "High probability of clinical benefit",
            BenefitTier::Moderate => "Moderate probability of clinical benefit",
            BenefitTier::Low => "Low probability of clinical benefit",
            BenefitTier::Minimal => "Minimal clinical benefit expected",
        }
    }
}

impl fmt::Display for BenefitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative rate of kidney-function decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressionRate {
    /// Annual decline of at most 1 ml/min/1.73m².
    Normal,
    /// Above 1 and up to 3.
    Slow,
    /// Above 3 and up to 5.
    Moderate,
    /// Above 5.
    Rapid,
}

impl ProgressionRate {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressionRate::Normal => "normal",
            ProgressionRate::Slow => "slow",
            ProgressionRate::Moderate => "moderate",
            ProgressionRate::Rapid => "rapid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressionRate::Normal => "Normal",
            ProgressionRate::Slow => "Slow",
            ProgressionRate::Moderate => "Moderate",
            ProgressionRate::Rapid => "Rapid",
        }
    }
}

impl fmt::Display for ProgressionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    YoungerAdult,
    OlderAdult,
}

impl AgeGroup {
    /// Age at which a patient is reported as an older adult.
    pub const OLDER_ADULT_AGE: f64 = 65.0;

    pub fn from_age(age: f64) -> Self {
        if age < Self::OLDER_ADULT_AGE {
            AgeGroup::YoungerAdult
        } else {
            AgeGroup::OlderAdult
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::YoungerAdult => "Younger adult",
            AgeGroup::OlderAdult => "Older adult",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_type_from_str() {
        assert_eq!("total".parse::<SlopeType>().unwrap(), SlopeType::Total);
        assert_eq!(" CHRONIC ".parse::<SlopeType>().unwrap(), SlopeType::Chronic);
        assert_eq!(
            "acute".parse::<SlopeType>().unwrap_err(),
            "Unknown slope type: acute"
        );
    }

    #[test]
    fn test_study_size_from_str() {
        assert_eq!("Large".parse::<StudySize>().unwrap(), StudySize::Large);
        assert_eq!("modest".parse::<StudySize>().unwrap(), StudySize::Modest);
        assert_eq!(
            "INFINITE".parse::<StudySize>().unwrap(),
            StudySize::Infinite
        );
        assert!("huge".parse::<StudySize>().is_err());
    }

    #[test]
    fn test_tier_probabilities_and_risk() {
        assert_eq!(BenefitTier::High.probability_percent(), 97.5);
        assert_eq!(BenefitTier::Moderate.probability_percent(), 85.0);
        assert_eq!(BenefitTier::Low.probability_percent(), 60.0);
        assert_eq!(BenefitTier::Minimal.probability_percent(), 30.0);
        assert_eq!(BenefitTier::High.risk_level(), RiskLevel::Low);
        assert_eq!(BenefitTier::Low.risk_level(), RiskLevel::Moderate);
        assert_eq!(BenefitTier::Minimal.risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(BenefitTier::High > BenefitTier::Moderate);
        assert!(BenefitTier::Moderate > BenefitTier::Low);
        assert!(BenefitTier::Low > BenefitTier::Minimal);
    }

    #[test]
    fn test_age_group_boundary() {
        assert_eq!(AgeGroup::from_age(64.9), AgeGroup::YoungerAdult);
        assert_eq!(AgeGroup::from_age(65.0), AgeGroup::OlderAdult);
    }

    #[test]
    fn test_race_accepts_asian_alias() {
        assert_eq!("asian".parse::<Race>().unwrap(), Race::Other);
    }
}
