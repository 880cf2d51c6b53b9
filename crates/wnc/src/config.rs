//! Resolves the effective settings for one invocation.
//!
//! Precedence: command-line flag > environment > config file > default.
//! Everything is validated here, before any controller is contacted.

use clap::ValueEnum;
use wnc_config::Config;
use wnc_core::{Controller, QueryOptions, TlsVerification, parse_controllers};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Validated settings shared by every `show` command.
#[derive(Debug)]
pub struct Settings {
    pub controllers: Vec<Controller>,
    pub output: OutputFormat,
    pub options: QueryOptions,
}

/// Load the config file named by `--config`, or the platform default.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let config = match &global.config {
        Some(path) => wnc_config::load_config_from(path)?,
        None => wnc_config::load_config()?,
    };
    Ok(config)
}

/// Path of the config file in effect.
pub fn path(global: &GlobalOpts) -> std::path::PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(wnc_config::config_path)
}

pub fn resolve(global: &GlobalOpts) -> Result<Settings, CliError> {
    let config = load(global)?;

    let spec = global
        .controllers
        .as_deref()
        .or(config.controllers.as_deref())
        .ok_or_else(|| CliError::NoControllers {
            path: path(global).display().to_string(),
        })?;
    let controllers = parse_controllers(spec)?;

    let output = match global.output {
        Some(format) => format,
        None => OutputFormat::from_str(&config.defaults.output, true).map_err(|reason| {
            CliError::Validation {
                field: "defaults.output".into(),
                reason,
            }
        })?,
    };

    let tls = if global.insecure || config.defaults.insecure {
        TlsVerification::SkipVerify
    } else {
        TlsVerification::Verify
    };
    let options = QueryOptions::new(
        tls,
        global.timeout.unwrap_or(config.defaults.timeout),
        global.parallel.unwrap_or(config.defaults.parallelism),
    )?;

    tracing::debug!(
        controllers = controllers.len(),
        ?output,
        ?options,
        "settings resolved"
    );
    Ok(Settings {
        controllers,
        output,
        options,
    })
}
