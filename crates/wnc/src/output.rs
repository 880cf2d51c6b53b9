//! Output formatting: table or JSON.
//!
//! Tables use `tabled` with one row type per entity; JSON serializes the
//! merged records themselves, so an empty result prints `[]`.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Color an admin/oper state: green when up, red when down.
pub fn paint_state(state: &str, color: bool) -> String {
    let text = or_dash(state);
    if !color {
        return text;
    }
    let lower = state.to_ascii_lowercase();
    if lower.ends_with("enabled") || lower.ends_with("-up") || lower == "run" || lower == "up" {
        text.green().to_string()
    } else if lower.ends_with("disabled") || lower.ends_with("-down") || lower == "down" {
        text.red().to_string()
    } else {
        text
    }
}

// ── Cell helpers ─────────────────────────────────────────────────────

/// `-` for empty cells.
pub fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".into()
    } else {
        value.to_owned()
    }
}

/// Strip the YANG enum prefix from a state value
/// (`radio-state-enabled` -> `enabled`).
pub fn short_state<'a>(value: &'a str, prefix: &str) -> &'a str {
    value.strip_prefix(prefix).unwrap_or(value)
}

pub fn bytes(count: u64) -> String {
    bytesize::ByteSize::b(count).to_string()
}

// ── Render dispatcher ────────────────────────────────────────────────

/// Render records in the chosen format.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) -> Result<(), CliError> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
