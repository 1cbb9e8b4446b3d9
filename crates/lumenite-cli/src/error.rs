//! Error handling for the Lumenite CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::path::PathBuf;
use std::{
    error::Error,
    fmt::{self, Write as _},
};

use owo_colors::OwoColorize;
use thiserror::Error;

use lumenite_core::error::LumeniteError;

// Re-export so callers only need `use crate::error::*`.
pub use lumenite_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The route manifest named on the command line does not exist.
    #[error("Route file not found: {path}")]
    RouteFileNotFound { path: PathBuf },

    /// The route audit found problems.
    #[error("Route check failed with {findings} finding(s)")]
    CheckFailed { findings: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `lumenite-core` or the adapters.
    #[error("Routing failed: {0}")]
    Core(#[from] LumeniteError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::RouteFileNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Pass an existing manifest with --routes FILE".into(),
                "Omit --routes to use the built-in route table".into(),
            ],

            Self::CheckFailed { .. } => vec![
                "Fix the routes listed above".into(),
                "Handlers must look like Controller@action".into(),
                "Later duplicates of a (method, uri) pair are never reached".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Inspect the active file with 'lumenite config path'".into(),
                "Use 'lumenite init --force' to recreate a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::RouteFileNotFound { .. } => ErrorCategory::NotFound,
            Self::CheckFailed { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Messages of the underlying causes, outermost first.
    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            causes.push(err.to_string());
            source = err.source();
        }
        causes
    }

    /// Render the error report written to stderr.
    ///
    /// The first line is `error[<category>]: <message>`; causes are only
    /// listed when `verbose` is set.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();
        let label = format!("error[{}]:", self.category());

        if color {
            let _ = writeln!(out, "{} {}", label.red().bold(), self.to_string().red());
        } else {
            let _ = writeln!(out, "{label} {self}");
        }

        if verbose {
            for cause in self.causes() {
                if color {
                    let _ = writeln!(out, "  {} {}", "caused by:".dimmed(), cause.dimmed());
                } else {
                    let _ = writeln!(out, "  caused by: {cause}");
                }
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let heading = if color {
                "help:".yellow().bold().to_string()
            } else {
                "help:".to_string()
            };
            for suggestion in suggestions {
                let _ = writeln!(out, "  {heading} {suggestion}");
            }
        }

        if !verbose && !self.causes().is_empty() {
            out.push_str("  (run with -v to see the underlying cause)\n");
        }

        out
    }

    /// Emit one tracing event at a severity matching the category.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = code, category = %self.category(), "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = code, category = %self.category(), "{self}");
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "error source");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, or routes that fail the audit.
    UserError,
    /// A named file or resource does not exist.
    NotFound,
    /// Config file, route file or handler descriptor defects.
    Configuration,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UserError => "usage",
            Self::NotFound => "not-found",
            Self::Configuration => "config",
            Self::Internal => "internal",
        })
    }
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// There is no blanket impl; it would overlap with the concrete ones.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, LumeniteError> {
    /// Core errors already carry their context; the message is dropped.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}
