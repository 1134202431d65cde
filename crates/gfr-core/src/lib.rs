//! GFR slope computation engine.
//!
//! Every stage is a pure function of a validated [`PatientInput`]:
//!
//! 1. [`validate`] turns raw caller input into a [`PatientInput`] or a
//!    field-level [`ValidationErrors`] map.
//! 2. [`slope`] computes the total or chronic GFR slope.
//! 3. [`threshold`] resolves the 97.5% PPV benefit threshold.
//! 4. [`benefit`] buckets the slope magnitude into a benefit tier.
//! 5. [`hazard`] estimates the hazard ratio from the meta-regression.
//! 6. [`prognosis`] projects progression rate and years to end stage.
//!
//! [`engine::assess`] runs stages 2-6; [`engine::assess_raw`] adds
//! validation in front.
//!
//! [`PatientInput`]: gfr_model::PatientInput
//! [`ValidationErrors`]: gfr_model::ValidationErrors

pub mod benefit;
pub mod context;
pub mod engine;
pub mod hazard;
pub mod interpret;
pub mod phi;
pub mod prognosis;
pub mod slope;
pub mod threshold;
pub mod validate;

pub use engine::{assess, assess_raw};
pub use validate::validate;
