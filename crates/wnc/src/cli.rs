//! Clap derive structures for the `wnc` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Also
//! compiled by `build.rs` for man page generation, so it must only depend
//! on clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wnc -- one view across a fleet of wireless network controllers
#[derive(Debug, Parser)]
#[command(
    name = "wnc",
    version,
    about = "Query a fleet of wireless network controllers as one",
    long_about = "Fetches access points, clients, WLANs and radio state from every\n\
        configured controller over RESTCONF, joins the per-controller data and\n\
        prints one combined table or JSON array.\n\n\
        A controller that fails any fetch is left out of the result; the\n\
        command itself still succeeds.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controllers as comma-separated host:credential pairs
    ///
    /// The credential is sent as HTTP Basic authorization. Hosts may carry a
    /// port and an optional scheme, e.g. `https://wnc1:8443:dXNlcjpwYXNz`.
    #[arg(long, short = 'c', env = "WNC_CONTROLLERS", hide_env_values = true, global = true)]
    pub controllers: Option<String>,

    /// Output format [default: table, or `defaults.output` from the config file]
    #[arg(long, short = 'o', env = "WNC_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "WNC_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: 60]
    #[arg(long, env = "WNC_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Number of controllers queried at once [default: 1]
    #[arg(long, env = "WNC_PARALLEL", global = true)]
    pub parallel: Option<usize>,

    /// Config file to use instead of the platform default
    #[arg(long, env = "WNC_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a fleet-wide view of one entity
    #[command(alias = "s")]
    Show(ShowArgs),

    /// Inspect the CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Show ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(subcommand)]
    pub command: ShowCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShowCommand {
    /// Access points with LLDP neighbor and system state
    #[command(alias = "aps")]
    Ap,

    /// Policy, site and RF tag of every access point
    #[command(alias = "tags")]
    ApTag,

    /// Associated client stations
    #[command(alias = "clients")]
    Client(ClientArgs),

    /// Policy tag to WLAN and policy profile mappings
    #[command(alias = "wlans")]
    Wlan,

    /// One row per radio: channel, power, load and RF profile
    Overview(OverviewArgs),
}

#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Only clients on this SSID (exact, case-sensitive)
    #[arg(long)]
    pub ssid: Option<String>,

    /// Only clients on this radio slot (e.g. 0, 1, 2)
    #[arg(long)]
    pub radio: Option<String>,
}

#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// Only radios in this slot (e.g. 0, 1, 2)
    #[arg(long)]
    pub radio: Option<String>,

    /// Sort key: name, mac, channel-width, tx-power, client-count
    ///
    /// An unrecognized key keeps controller order.
    #[arg(long, default_value = "name")]
    pub sort_by: String,

    /// Sort direction
    #[arg(long, value_enum, default_value = "asc")]
    pub sort_order: SortDirection,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (credentials masked)
    Show,
    /// Print the config file location
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
