//! Domain value objects: Method and StatusCode.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `Method` keeps whatever verb it was given, upper-cased; `StatusCode`
//! only knows the statuses the router itself emits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Method ───────────────────────────────────────────────────────────────────

/// An HTTP verb token, normalized to uppercase.
///
/// Registration never rejects a verb, so non-standard tokens are kept as long
/// as they are upper-cased the same way on both sides of every comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Method(String);

impl Method {
    pub const GET: &'static str = "GET";
    pub const POST: &'static str = "POST";
    pub const PUT: &'static str = "PUT";
    pub const DELETE: &'static str = "DELETE";
    pub const PATCH: &'static str = "PATCH";
    pub const HEAD: &'static str = "HEAD";
    pub const OPTIONS: &'static str = "OPTIONS";

    /// The verbs with a registration shorthand on the router.
    pub const STANDARD: [&'static str; 7] = [
        Self::GET,
        Self::POST,
        Self::PUT,
        Self::DELETE,
        Self::PATCH,
        Self::HEAD,
        Self::OPTIONS,
    ];

    /// Normalize any casing of a verb.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(token.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the seven verbs with a shorthand.
    pub fn is_standard(&self) -> bool {
        Self::STANDARD.contains(&self.0.as_str())
    }

    /// Case-insensitive comparison against a raw token.
    pub fn matches(&self, token: &str) -> bool {
        self.0.eq_ignore_ascii_case(token.trim())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Method> for String {
    fn from(m: Method) -> Self {
        m.0
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── StatusCode ───────────────────────────────────────────────────────────────

/// A status the router can answer with on its error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServerError,
}

impl StatusCode {
    /// Look up a recognized status.
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            400 => Some(Self::BadRequest),
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            500 => Some(Self::InternalServerError),
            _ => None,
        }
    }

    pub const fn code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }

    pub const fn reason_phrase(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Internal Server Error",
        }
    }

    /// `"<code> <reason phrase>"`, e.g. `404 Not Found`.
    pub fn status_text(self) -> String {
        format!("{} {}", self.code(), self.reason_phrase())
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}
