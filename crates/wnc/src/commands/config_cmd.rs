//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let rendered = cfg.redacted().to_toml()?;
            output::print_output(rendered.trim_end(), global.quiet)
        }
        ConfigCommand::Path => {
            let path = config::path(global);
            output::print_output(&path.display().to_string(), global.quiet)
        }
    }
}
