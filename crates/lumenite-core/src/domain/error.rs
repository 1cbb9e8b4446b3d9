// ============================================================================
// domain/error.rs - ROUTING ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (audit reports keep them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors (server-side defects)
    // ========================================================================
    #[error("malformed handler '{descriptor}': {reason}")]
    MalformedHandler { descriptor: String, reason: String },

    #[error("controller '{controller}' is not registered")]
    ControllerNotRegistered { controller: String },

    #[error("action '{action}' not found on controller '{controller}'")]
    ActionNotFound { controller: String, action: String },

    // ========================================================================
    // Validation Errors (route table hygiene)
    // ========================================================================
    #[error("route {method} {uri} is shadowed by an earlier registration (position {position})")]
    ShadowedRoute {
        method: String,
        uri: String,
        position: usize,
    },

    #[error("invalid route {method} {uri}: {reason}")]
    InvalidRoute {
        method: String,
        uri: String,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedHandler { descriptor, .. } => vec![
                format!("Handler '{}' must look like 'Controller@action'", descriptor),
                "Use exactly one '@' between the controller and the action".into(),
                "Example: Welcome@index".into(),
            ],
            Self::ControllerNotRegistered { controller } => vec![
                format!("Register '{}' with the controller registry", controller),
                "Controller names get the 'Controller' suffix: 'Welcome' -> 'WelcomeController'"
                    .into(),
            ],
            Self::ActionNotFound { controller, action } => vec![
                format!("Add an '{}' action to {}", action, controller),
                "Or point the route at an existing action".into(),
            ],
            Self::ShadowedRoute { method, uri, .. } => vec![
                format!("Only the first {} {} route is ever dispatched", method, uri),
                "Remove the duplicate registration".into(),
            ],
            Self::InvalidRoute { .. } => vec!["Check the route manifest".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedHandler { .. } | Self::ControllerNotRegistered { .. } => {
                ErrorCategory::Configuration
            }
            Self::ActionNotFound { .. } => ErrorCategory::NotFound,
            Self::ShadowedRoute { .. } | Self::InvalidRoute { .. } => ErrorCategory::Validation,
        }
    }
}

/// Error class shared by every layer; the CLI maps it to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
