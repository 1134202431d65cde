//! Benefit threshold lookup.
//!
//! Thresholds are the slope differences (ml/min/1.73m²/yr) at which a trial
//! result has a 97.5% positive predictive value for clinical benefit, per
//! Inker et al. (2019), Table 3.

use gfr_model::{SlopeType, StudySize, ThresholdKey};

/// Shortest total-slope interval that uses the 3-year row.
pub const TOTAL_3YR_MIN_YEARS: f64 = 2.5;

/// Shortest total-slope interval that uses the 2-year row.
pub const TOTAL_2YR_MIN_YEARS: f64 = 1.5;

/// Table rows in display order.
pub const ALL_KEYS: [ThresholdKey; 4] = [
    ThresholdKey::Total3yr,
    ThresholdKey::Total2yr,
    ThresholdKey::Total1yr,
    ThresholdKey::Chronic,
];

/// Study-size columns in display order.
pub const ALL_STUDY_SIZES: [StudySize; 3] =
    [StudySize::Large, StudySize::Modest, StudySize::Infinite];

/// A threshold together with the row it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedThreshold {
    pub key: ThresholdKey,
    pub value: f64,
}

/// Selects the table row. Chronic slopes ignore the interval; boundary
/// intervals resolve to the longer-duration row.
pub fn select_key(slope_type: SlopeType, time_interval_years: f64) -> ThresholdKey {
    match slope_type {
        SlopeType::Chronic => ThresholdKey::Chronic,
        SlopeType::Total if time_interval_years >= TOTAL_3YR_MIN_YEARS => ThresholdKey::Total3yr,
        SlopeType::Total if time_interval_years >= TOTAL_2YR_MIN_YEARS => ThresholdKey::Total2yr,
        SlopeType::Total => ThresholdKey::Total1yr,
    }
}

/// Threshold value for a table cell.
pub fn threshold(key: ThresholdKey, study_size: StudySize) -> f64 {
    match (key, study_size) {
        (ThresholdKey::Total3yr, StudySize::Large) => 0.48,
        (ThresholdKey::Total3yr, StudySize::Modest) => 0.74,
        (ThresholdKey::Total3yr, StudySize::Infinite) => 0.24,
        (ThresholdKey::Total2yr, StudySize::Large) => 0.54,
        (ThresholdKey::Total2yr, StudySize::Modest) => 0.72,
        (ThresholdKey::Total2yr, StudySize::Infinite) => 0.42,
        (ThresholdKey::Total1yr, StudySize::Large) => 1.32,
        (ThresholdKey::Total1yr, StudySize::Modest) => 1.31,
        (ThresholdKey::Total1yr, StudySize::Infinite) => 1.26,
        (ThresholdKey::Chronic, StudySize::Large) => 0.62,
        (ThresholdKey::Chronic, StudySize::Modest) => 0.85,
        (ThresholdKey::Chronic, StudySize::Infinite) => 0.37,
    }
}

pub fn resolve(
    slope_type: SlopeType,
    time_interval_years: f64,
    study_size: StudySize,
) -> ResolvedThreshold {
    let key = select_key(slope_type, time_interval_years);
    ResolvedThreshold {
        key,
        value: threshold(key, study_size),
    }
}
