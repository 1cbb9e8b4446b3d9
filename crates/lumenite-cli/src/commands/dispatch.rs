//! `lumenite dispatch` - answer one request and print the response.

use std::io;

use tracing::info;

use lumenite_adapters::{ResponseStyle, StaticRequestContext, StreamResponse};
use lumenite_core::prelude::DispatchOutcome;

use crate::{cli::DispatchArgs, config::AppConfig, error::CliResult};

/// Dispatch `METHOD URI` and write the framed response to stdout.
///
/// Error pages (404, 500, ...) are a normal answer and exit 0; only
/// configuration defects such as a malformed handler fail the command.
pub fn execute(args: DispatchArgs, config: AppConfig) -> CliResult<()> {
    let style = if args.cgi {
        ResponseStyle::Cgi
    } else {
        config.response.style
    };

    let response = StreamResponse::new(io::stdout(), style);
    let router = super::build_router(&args.source, &config, Box::new(response))?
        .with_request_context(Box::new(StaticRequestContext::new(
            args.method.as_str(),
            args.uri.as_str(),
        )));

    match router.dispatch_current()? {
        DispatchOutcome::Handled { controller, action } => {
            info!(%controller, %action, "dispatched");
        }
        DispatchOutcome::Halted(page) => {
            info!(status = %page.status(), "answered with error page");
        }
    }
    Ok(())
}
