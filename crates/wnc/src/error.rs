//! CLI error types with miette diagnostics.
//!
//! Only configuration problems end up here. Controller fetch failures are
//! reported by the aggregators and never change the exit code.

use miette::Diagnostic;
use thiserror::Error;

use wnc_config::ConfigError;
use wnc_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Controllers ──────────────────────────────────────────────────

    #[error("No controllers configured")]
    #[diagnostic(
        code(wnc::no_controllers),
        help(
            "Pass --controllers host:credential[,host:credential...],\n\
             set WNC_CONTROLLERS, or add `controllers = \"...\"` to {path}"
        )
    )]
    NoControllers { path: String },

    #[error("Invalid controller entry '{entry}': {reason}")]
    #[diagnostic(
        code(wnc::invalid_controllers),
        help(
            "Each entry must be host:credential, e.g. wnc1.example.com:dXNlcjpwYXNz.\n\
             The last colon separates host from credential, so ports are allowed."
        )
    )]
    InvalidControllers { entry: String, reason: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wnc::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Could not load configuration")]
    #[diagnostic(
        code(wnc::config),
        help("Check the file printed by `wnc config path`.")
    )]
    Config(#[source] Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON output: {0}")]
    #[diagnostic(code(wnc::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoControllers { .. }
            | Self::InvalidControllers { .. }
            | Self::Validation { .. } => exit_code::USAGE,
            Self::Config(_) => exit_code::CONFIG,
            Self::Io(_) | Self::Json(_) => exit_code::GENERAL,
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidControllerSpec { entry, reason } => {
                Self::InvalidControllers { entry, reason }
            }
            CoreError::NoControllers => Self::NoControllers {
                path: wnc_config::config_path().display().to_string(),
            },
            CoreError::InvalidOption { field, reason } => Self::Validation { field, reason },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}
