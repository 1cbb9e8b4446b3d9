//! Application layer errors.
//!
//! These errors represent failures in ports and orchestration, not routing
//! rules. Routing rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a request through the ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The response sink refused a write.
    #[error("Response write failed: {reason}")]
    ResponseWrite { reason: String },

    /// Response state lock poisoned.
    #[error("Response state is unavailable")]
    ResponseLock,

    /// Controller registry lock poisoned.
    #[error("Controller registry is unavailable")]
    RegistryLock,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// The request context could not supply a value.
    #[error("Request {field} is not available")]
    RequestUnavailable { field: &'static str },

    /// A controller action returned an error of its own.
    #[error("{controller}::{action} failed: {reason}")]
    ActionFailed {
        controller: String,
        action: String,
        reason: String,
    },

    /// Route manifest could not be read or parsed.
    #[error("Route file error at {path}: {reason}")]
    RouteFile { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ResponseWrite { reason } => vec![
                format!("Writing the response failed: {}", reason),
                "Each router answers exactly one request".into(),
            ],
            Self::ResponseLock | Self::RegistryLock => vec![
                "A handler panicked while holding shared state".into(),
                "Check earlier log output for the panic".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            Self::RequestUnavailable { field } => vec![
                format!("The request {} was not provided", field),
                "CGI servers set REQUEST_METHOD and REQUEST_URI".into(),
            ],
            Self::RouteFile { path, .. } => vec![
                format!("Check the route file: {}", path.display()),
                "Each [[routes]] entry needs method, uri and handler".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResponseWrite { .. } | Self::ResponseLock | Self::RegistryLock => {
                ErrorCategory::Internal
            }
            Self::AdapterNotConfigured { .. } | Self::RouteFile { .. } => {
                ErrorCategory::Configuration
            }
            Self::RequestUnavailable { .. } => ErrorCategory::Validation,
            Self::ActionFailed { .. } => ErrorCategory::Internal,
        }
    }
}
