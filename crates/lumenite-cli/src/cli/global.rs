//! Flags shared by every subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Global flags, flattened into [`super::Cli`].
#[derive(Debug, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Log more: `-v` handled requests, `-vv` route matching, `-vvv` response framing.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and response bodies.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable ANSI colours (also honours `NO_COLOR`).
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read configuration from FILE instead of the default locations.
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Format for status output; response bodies are never reformatted.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,

    /// Also write logs, without colours, to FILE.
    #[arg(long, global = true, value_name = "FILE", env = "LUMENITE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Rendering of status output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Unicode markers and colours.
    Human,
    /// ASCII prefixes, no colours.
    Plain,
    /// JSON documents where a command supports them.
    Json,
}
