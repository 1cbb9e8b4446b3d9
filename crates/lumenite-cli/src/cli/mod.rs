//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lumenite",
    bin_name = "lumenite",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Controller-dispatching request router",
    long_about = "Lumenite matches a request against a route table and \
                  dispatches it to a controller action, or answers with an \
                  HTTP error page.",
    after_help = "EXAMPLES:\n\
        \x20 lumenite dispatch GET /\n\
        \x20 lumenite dispatch POST /users --routes routes.toml\n\
        \x20 lumenite routes --format json\n\
        \x20 lumenite check --routes routes.toml\n\
        \x20 lumenite error 404",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dispatch one request and print the response.
    #[command(
        visible_alias = "d",
        about = "Dispatch a request",
        after_help = "EXAMPLES:\n\
            \x20 lumenite dispatch GET /\n\
            \x20 lumenite dispatch get '/users?page=2' --routes routes.toml\n\
            \x20 lumenite dispatch GET / --cgi"
    )]
    Dispatch(DispatchArgs),

    /// Answer the request described by CGI environment variables.
    #[command(
        about = "Run as a CGI handler",
        after_help = "Reads REQUEST_METHOD and REQUEST_URI (or PATH_INFO) and writes\n\
            a CGI response to stdout."
    )]
    Cgi(CgiArgs),

    /// Print the route table.
    #[command(
        visible_alias = "ls",
        about = "List routes",
        after_help = "EXAMPLES:\n\
            \x20 lumenite routes\n\
            \x20 lumenite routes --routes routes.toml --format csv"
    )]
    Routes(RoutesArgs),

    /// Audit the route table against the registered controllers.
    #[command(about = "Check routes for defects")]
    Check(CheckArgs),

    /// Render an error page.
    #[command(
        about = "Render an error page",
        after_help = "EXAMPLES:\n\
            \x20 lumenite error 404\n\
            \x20 lumenite error 403 --title Nope --message 'Go away' --headers"
    )]
    Error(ErrorArgs),

    /// Initialise a Lumenite configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 lumenite init           # default location\n\
            \x20 lumenite init --global  # global config\n\
            \x20 lumenite init --local   # .lumenite.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lumenite completions bash > ~/.local/share/bash-completion/completions/lumenite\n\
            \x20 lumenite completions zsh  > ~/.zfunc/_lumenite"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Lumenite configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 lumenite config get routes.file\n\
            \x20 lumenite config list"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where the route table comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct RouteSource {
    /// Route manifest (TOML or JSON). Falls back to `routes.file` in config,
    /// then to the built-in table.
    #[arg(
        short = 'r',
        long = "routes",
        value_name = "FILE",
        help = "Route manifest file"
    )]
    pub routes: Option<PathBuf>,

    /// Base path prefix; overrides the manifest and config.
    #[arg(long = "base-path", value_name = "PATH", help = "Base path prefix")]
    pub base_path: Option<String>,
}

// ── dispatch ──────────────────────────────────────────────────────────────────

/// Arguments for `lumenite dispatch`.
#[derive(Debug, Args)]
pub struct DispatchArgs {
    /// Request method, any casing.
    #[arg(value_name = "METHOD")]
    pub method: String,

    /// Request target; a query string is ignored for matching.
    #[arg(value_name = "URI")]
    pub uri: String,

    #[command(flatten)]
    pub source: RouteSource,

    /// Frame the response as CGI (`Status:` header).
    #[arg(long = "cgi", help = "Use CGI response framing")]
    pub cgi: bool,
}

// ── cgi ───────────────────────────────────────────────────────────────────────

/// Arguments for `lumenite cgi`.
#[derive(Debug, Args)]
pub struct CgiArgs {
    #[command(flatten)]
    pub source: RouteSource,
}

// ── routes ────────────────────────────────────────────────────────────────────

/// Arguments for `lumenite routes`.
#[derive(Debug, Args)]
pub struct RoutesArgs {
    #[command(flatten)]
    pub source: RouteSource,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `routes` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `METHOD URI` per line.
    List,
    /// JSON document.
    Json,
    /// CSV rows.
    Csv,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `lumenite check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: RouteSource,
}

// ── error ─────────────────────────────────────────────────────────────────────

/// Arguments for `lumenite error`.
#[derive(Debug, Args)]
pub struct ErrorArgs {
    /// Status code; unrecognized codes render as 400.
    #[arg(value_name = "CODE")]
    pub code: u16,

    /// Heading override.
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Paragraph override.
    #[arg(long = "message", value_name = "TEXT")]
    pub message: Option<String>,

    /// Print the status line and headers before the body.
    #[arg(long = "headers", help = "Include status line and headers")]
    pub headers: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `lumenite init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(long = "global", conflicts_with = "local", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.lumenite.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lumenite completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `lumenite config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `routes.file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_dispatch_command() {
        let cli = Cli::parse_from(["lumenite", "dispatch", "get", "/users", "-r", "routes.toml"]);
        match cli.command {
            Commands::Dispatch(args) => {
                assert_eq!(args.method, "get");
                assert_eq!(args.uri, "/users");
                assert_eq!(args.source.routes, Some(PathBuf::from("routes.toml")));
                assert!(!args.cgi);
            }
            other => panic!("expected Dispatch, got {other:?}"),
        }
    }

    #[test]
    fn parse_error_overrides() {
        let cli = Cli::parse_from([
            "lumenite", "error", "403", "--title", "Nope", "--message", "Go away",
        ]);
        if let Commands::Error(args) = cli.command {
            assert_eq!(args.code, 403);
            assert_eq!(args.title.as_deref(), Some("Nope"));
            assert_eq!(args.message.as_deref(), Some("Go away"));
        } else {
            panic!("expected Error command");
        }
    }

    #[test]
    fn routes_alias() {
        let cli = Cli::parse_from(["lumenite", "ls", "--format", "csv"]);
        assert!(matches!(
            cli.command,
            Commands::Routes(RoutesArgs {
                format: ListFormat::Csv,
                ..
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["lumenite", "--quiet", "--verbose", "routes"]);
        assert!(result.is_err());
    }

    #[test]
    fn init_local_and_global_conflict() {
        let result = Cli::try_parse_from(["lumenite", "init", "--local", "--global"]);
        assert!(result.is_err());
    }
}
