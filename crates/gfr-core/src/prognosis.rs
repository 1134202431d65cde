//! Progression rate and linear years-to-end-stage projection.

use gfr_model::{Prognosis, ProgressionRate, YearsToEndStage};

/// GFR treated as end-stage kidney disease, ml/min/1.73m².
pub const END_STAGE_GFR: f64 = 15.0;

pub const RAPID_DECLINE: f64 = 5.0;
pub const MODERATE_DECLINE: f64 = 3.0;
pub const SLOW_DECLINE: f64 = 1.0;

pub fn progression_rate(annual_decline: f64) -> ProgressionRate {
    if annual_decline > RAPID_DECLINE {
        ProgressionRate::Rapid
    } else if annual_decline > MODERATE_DECLINE {
        ProgressionRate::Moderate
    } else if annual_decline > SLOW_DECLINE {
        ProgressionRate::Slow
    } else {
        ProgressionRate::Normal
    }
}

/// Linear projection until GFR reaches [`END_STAGE_GFR`].
///
/// A zero decline projects no progression instead of dividing by zero.
pub fn years_to_end_stage(baseline_gfr: f64, annual_decline: f64) -> YearsToEndStage {
    if baseline_gfr <= END_STAGE_GFR {
        YearsToEndStage::AlreadyAtRisk
    } else if annual_decline == 0.0 {
        YearsToEndStage::NoProgression
    } else {
        YearsToEndStage::Years((baseline_gfr - END_STAGE_GFR) / annual_decline)
    }
}

/// Projects prognosis from a signed slope. Only its magnitude is used.
pub fn project(slope: f64, baseline_gfr: f64) -> Prognosis {
    let annual_decline = slope.abs();
    Prognosis {
        progression_rate: progression_rate(annual_decline),
        annual_decline,
        years_to_end_stage: years_to_end_stage(baseline_gfr, annual_decline),
    }
}
