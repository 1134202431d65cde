//! Redaction of patient-level values in log output.
//!
//! GFR measurements and ages are patient data. They appear in `tracing`
//! events only after a caller opts in with [`set_log_data_enabled`];
//! otherwise [`REDACTED_VALUE`] is logged in their place.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when patient-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn set_log_data_enabled(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// Returns true if patient-level logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// Displays the wrapped number, or the redaction token when patient-level
/// logging is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Redacted(pub f64);

impl fmt::Display for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if log_data_enabled() {
            write!(f, "{}", self.0)
        } else {
            f.write_str(REDACTED_VALUE)
        }
    }
}
