//! `lumenite cgi` - CGI entry point.
//!
//! The host server has already committed to a response, so every failure
//! that happens before output starts is turned into an error page.

use std::io;

use tracing::{error, info};

use lumenite_adapters::{CgiRequestContext, ResponseStyle, StreamResponse};
use lumenite_core::{
    application::ApplicationError,
    domain::{ErrorMessage, StatusCode},
    error::LumeniteError,
};

use crate::{
    cli::CgiArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub fn execute(args: CgiArgs, config: AppConfig) -> CliResult<()> {
    let response = StreamResponse::new(io::stdout(), ResponseStyle::Cgi);
    let router = super::build_router(&args.source, &config, Box::new(response))?
        .with_request_context(Box::new(CgiRequestContext::from_env()));

    match router.dispatch_current() {
        Ok(outcome) => {
            info!(handled = outcome.is_handled(), "cgi request complete");
            Ok(())
        }
        Err(e) => {
            let status = fallback_status(&e);
            error!(error = %e, status = %status, "request failed, answering with error page");
            router
                .error(status.code(), ErrorMessage::new())
                .map(|_| ())
                .map_err(|_| CliError::Core(e))
        }
    }
}

/// Status for a request that could not be dispatched.
fn fallback_status(err: &LumeniteError) -> StatusCode {
    match err {
        LumeniteError::Application(ApplicationError::RequestUnavailable { .. }) => {
            StatusCode::BadRequest
        }
        _ => StatusCode::InternalServerError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumenite_core::domain::DomainError;

    #[test]
    fn missing_request_data_is_a_bad_request() {
        let err = ApplicationError::RequestUnavailable { field: "method" }.into();
        assert_eq!(fallback_status(&err), StatusCode::BadRequest);
    }

    #[test]
    fn malformed_handler_is_a_server_error() {
        let err = DomainError::MalformedHandler {
            descriptor: "Welcome".into(),
            reason: "missing '@' separator".into(),
        }
        .into();
        assert_eq!(fallback_status(&err), StatusCode::InternalServerError);
    }
}
