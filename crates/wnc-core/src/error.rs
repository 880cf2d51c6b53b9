// ── Core error types ──
//
// Only configuration problems are errors here. Controller fetch failures
// never surface as `CoreError`; aggregators record them as
// `ControllerFailure` and keep going.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid controller entry '{entry}': {reason}")]
    InvalidControllerSpec { entry: String, reason: String },

    #[error("No controllers specified")]
    NoControllers,

    #[error("Invalid value for {field}: {reason}")]
    InvalidOption { field: String, reason: String },
}
