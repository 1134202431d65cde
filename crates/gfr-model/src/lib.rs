pub mod assessment;
pub mod enums;
pub mod error;
pub mod input;

pub use assessment::{
    Assessment, Interpretation, PatientContext, Prognosis, SlopeResult, ThresholdKey,
    YearsToEndStage,
};
pub use enums::{
    AgeGroup, BenefitTier, PopulationPreference, ProgressionRate, Race, RiskLevel, Sex,
    SlopeType, StudySize,
};
pub use error::{ComputationError, Field, GfrError, Result, ValidationErrors};
pub use input::{Demographics, PatientInput, RawPatientInput};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_to_end_stage_serializes_tagged() {
        let json = serde_json::to_string(&YearsToEndStage::Years(12.5)).expect("serialize");
        assert_eq!(json, r#"{"kind":"years","value":12.5}"#);
        let json = serde_json::to_string(&YearsToEndStage::AlreadyAtRisk).expect("serialize");
        assert_eq!(json, r#"{"kind":"already_at_risk"}"#);
    }

    #[test]
    fn validation_errors_serialize_as_object() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::BaselineGfr, "Baseline GFR is required");
        let json = serde_json::to_string(&errors).expect("serialize errors");
        assert_eq!(json, r#"{"baseline_gfr":"Baseline GFR is required"}"#);
    }
}
