//! Property tests for the computation stages.

use proptest::prelude::*;

use gfr_core::benefit::classify;
use gfr_core::hazard::{HR_MAX, HR_MIN, estimate};
use gfr_core::slope::{MIN_CHRONIC_YEARS, chronic_years, total_slope};
use gfr_core::threshold::{ALL_KEYS, ALL_STUDY_SIZES, select_key, threshold};
use gfr_core::{assess, validate};
use gfr_model::{PatientInput, RawPatientInput, SlopeType, StudySize, ThresholdKey};

fn slope_type() -> impl Strategy<Value = SlopeType> {
    prop_oneof![Just(SlopeType::Total), Just(SlopeType::Chronic)]
}

fn study_size() -> impl Strategy<Value = StudySize> {
    prop_oneof![
        Just(StudySize::Large),
        Just(StudySize::Modest),
        Just(StudySize::Infinite)
    ]
}

fn gfr() -> impl Strategy<Value = f64> {
    5.0..=150.0_f64
}

fn interval() -> impl Strategy<Value = f64> {
    0.5..=5.0_f64
}

proptest! {
    #[test]
    fn total_slope_is_antisymmetric(b in gfr(), f in gfr(), t in interval()) {
        let forward = total_slope(b, f, t).unwrap();
        let backward = total_slope(f, b, t).unwrap();
        prop_assert_eq!(forward, -backward);
    }

    #[test]
    fn chronic_denominator_never_below_floor(t in 0.0..=5.0_f64) {
        let years = chronic_years(t);
        prop_assert!(years >= MIN_CHRONIC_YEARS);
        if t <= 0.5 {
            prop_assert_eq!(years, MIN_CHRONIC_YEARS);
        }
    }

    #[test]
    fn tier_never_rises_as_effect_falls(
        high in 0.0..10.0_f64,
        decrease in 0.0..10.0_f64,
        key_index in 0..4usize,
        size in study_size(),
    ) {
        let cutoff = threshold(ALL_KEYS[key_index], size);
        let low = (high - decrease).max(0.0);
        prop_assert!(classify(low, cutoff) <= classify(high, cutoff));
    }

    #[test]
    fn hazard_ratio_is_bounded_and_non_increasing(
        effect in 0.0..1.0e6_f64,
        extra in 0.0..100.0_f64,
        kind in slope_type(),
    ) {
        let hr = estimate(effect, kind);
        prop_assert!((HR_MIN..=HR_MAX).contains(&hr));
        prop_assert!(estimate(effect + extra, kind) <= hr);
    }

    #[test]
    fn chronic_always_selects_chronic_row(t in 0.0..=10.0_f64) {
        prop_assert_eq!(select_key(SlopeType::Chronic, t), ThresholdKey::Chronic);
    }

    #[test]
    fn assessment_is_idempotent(
        b in gfr(),
        f in gfr(),
        a in gfr(),
        t in interval(),
        kind in slope_type(),
        size in study_size(),
    ) {
        let input = match kind {
            SlopeType::Total => PatientInput::total(b, f, t, size),
            SlopeType::Chronic => PatientInput::chronic(b, a, f, t, size),
        };
        let first = assess(&input).unwrap();
        let second = assess(&input).unwrap();
        prop_assert_eq!(first.slope.value.to_bits(), second.slope.value.to_bits());
        prop_assert_eq!(
            first.interpretation.hazard_ratio.to_bits(),
            second.interpretation.hazard_ratio.to_bits()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn validator_accepts_iff_in_domain(
        b in 0.0..200.0_f64,
        f in 0.0..200.0_f64,
        t in 0.0..8.0_f64,
        acute in proptest::option::of(0.0..200.0_f64),
        kind in slope_type(),
    ) {
        let raw = RawPatientInput {
            baseline_gfr: Some(b.to_string()),
            follow_up_gfr: Some(f.to_string()),
            time_interval_years: Some(t.to_string()),
            slope_type: Some(kind.as_str().to_string()),
            acute_effect_gfr: acute.map(|value| value.to_string()),
            ..RawPatientInput::default()
        };
        let in_gfr = |value: f64| (5.0..=150.0).contains(&value);
        let acute_ok = match kind {
            SlopeType::Total => true,
            SlopeType::Chronic => acute.is_some_and(in_gfr),
        };
        let expected = in_gfr(b) && in_gfr(f) && (0.5..=5.0).contains(&t) && acute_ok;
        prop_assert_eq!(validate(&raw).is_ok(), expected);
    }
}

#[test]
fn infinite_sample_has_the_lowest_threshold() {
    for key in ALL_KEYS {
        let infinite = threshold(key, StudySize::Infinite);
        for size in ALL_STUDY_SIZES {
            assert!(infinite <= threshold(key, size), "{key}/{size}");
        }
    }
}
