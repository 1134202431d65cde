use gfr_model::{AgeGroup, PatientContext, PatientInput};

/// Patient context echoed alongside the assessment.
pub fn patient_context(input: &PatientInput) -> PatientContext {
    PatientContext {
        baseline_gfr: input.baseline_gfr,
        current_gfr: input.follow_up_gfr,
        time_interval_years: input.time_interval_years,
        age_group: input.demographics.age.map(AgeGroup::from_age),
        population: input.population,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gfr_model::{Demographics, PopulationPreference, StudySize};

    #[test]
    fn age_group_only_when_age_known() {
        let input = PatientInput::total(45.0, 43.0, 1.0, StudySize::Large);
        assert_eq!(patient_context(&input).age_group, None);

        let input = input
            .with_demographics(Demographics {
                age: Some(70.0),
                ..Demographics::default()
            })
            .with_population(PopulationPreference::Asian);
        let context = patient_context(&input);
        assert_eq!(context.age_group, Some(AgeGroup::OlderAdult));
        assert_eq!(context.population, PopulationPreference::Asian);
        assert_eq!(context.current_gfr, 43.0);
    }
}
