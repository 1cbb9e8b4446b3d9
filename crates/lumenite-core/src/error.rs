//! Root error type for the router.
//!
//! Client-facing failures (unknown route, unknown controller, missing action)
//! never show up here: the router answers those with an error page. What
//! reaches [`LumeniteError`] is a defect in the route table, an adapter, or
//! a controller action.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

#[derive(Debug, Error, Clone)]
pub enum LumeniteError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Raised by controller code. The router reports it as
    /// [`ApplicationError::ActionFailed`], naming the handler.
    #[error("{message}")]
    Controller { message: String },
}

impl LumeniteError {
    /// Failure raised from inside a controller action.
    pub fn controller(message: impl Into<String>) -> Self {
        Self::Controller {
            message: message.into(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Controller { .. } => {
                vec!["The controller action reported this failure; check its logs".into()]
            }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Controller { .. } => ErrorCategory::Internal,
        }
    }
}

pub type LumeniteResult<T> = Result<T, LumeniteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_handler_is_a_configuration_error() {
        let err: LumeniteError = DomainError::MalformedHandler {
            descriptor: "Welcome".into(),
            reason: "missing '@' separator".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.to_string(),
            "malformed handler 'Welcome': missing '@' separator"
        );
    }

    #[test]
    fn lock_errors_are_internal() {
        let err: LumeniteError = ApplicationError::ResponseLock.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn controller_failure_keeps_its_message() {
        let err = LumeniteError::controller("template missing");
        assert_eq!(err.to_string(), "template missing");
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
