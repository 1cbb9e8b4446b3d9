//! `lumenite error` - render an error page.

use std::io::{self, Write};

use lumenite_adapters::{MemoryResponse, StaticControllerRegistry, StreamResponse};
use lumenite_core::{application::ports::ResponseSink, prelude::*};

use crate::{
    cli::ErrorArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
};

pub fn execute(args: ErrorArgs, config: AppConfig) -> CliResult<()> {
    let message = build_message(&args);

    if args.headers {
        let response = StreamResponse::new(io::stdout(), config.response.style);
        render(Box::new(response), args.code, message)?;
    } else {
        let response = MemoryResponse::new();
        render(Box::new(response.clone()), args.code, message)?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(&response.body())
            .and_then(|()| stdout.flush())
            .with_cli_context(|| "writing error page to stdout")?;
    }
    Ok(())
}

fn build_message(args: &ErrorArgs) -> ErrorMessage {
    let mut message = ErrorMessage::new();
    if let Some(title) = &args.title {
        message = message.title(title.as_str());
    }
    if let Some(text) = &args.message {
        message = message.message(text.as_str());
    }
    message
}

/// Render through a router with no routes; only `error` is used.
fn render(response: Box<dyn ResponseSink>, code: u16, message: ErrorMessage) -> CliResult<()> {
    let router = Router::new(Box::new(StaticControllerRegistry::new()), response);
    router.error(code, message).with_cli_context(|| "rendering error page")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(code: u16, title: Option<&str>, message: Option<&str>) -> ErrorArgs {
        ErrorArgs {
            code,
            title: title.map(String::from),
            message: message.map(String::from),
            headers: false,
        }
    }

    #[test]
    fn overrides_carry_into_message() {
        let message = build_message(&args(403, Some("Nope"), None));
        let page = ErrorPage::new(StatusCode::Forbidden, message);
        assert_eq!(page.heading(), "Nope");
        assert_eq!(page.detail(), "403 Forbidden");
    }

    #[test]
    fn render_writes_page_to_sink() {
        let response = MemoryResponse::new();
        render(
            Box::new(response.clone()),
            404,
            build_message(&args(404, None, None)),
        )
        .unwrap();
        assert_eq!(response.status(), Some(404));
        assert!(response.body_text().contains("404 Not Found"));
    }
}
