use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StatusCode;

/// Optional overrides for the text of an error page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub title: Option<String>,
    pub message: Option<String>,
}

impl ErrorMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// No override given; the page falls back to the status text.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.message.is_none()
    }
}

/// The body the router emits on its error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPage {
    status: StatusCode,
    message: ErrorMessage,
}

impl ErrorPage {
    pub fn new(status: StatusCode, message: ErrorMessage) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &ErrorMessage {
        &self.message
    }

    /// Heading text: the override title, else the numeric code.
    pub fn heading(&self) -> String {
        self.message
            .title
            .clone()
            .unwrap_or_else(|| self.status.code().to_string())
    }

    /// Paragraph text: the override message, else `"<code> <phrase>"`.
    pub fn detail(&self) -> String {
        self.message
            .message
            .clone()
            .unwrap_or_else(|| self.status.status_text())
    }

    /// HTML fragment written as the response body.
    pub fn render_html(&self) -> String {
        format!(
            "<h1>Error: {}</h1>\n<p>{}</p>\n",
            escape_html(&self.heading()),
            escape_html(&self.detail())
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
