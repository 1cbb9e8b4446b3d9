use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::Method;

/// One registered endpoint: a verb and an exact path bound to a handler
/// descriptor.
///
/// The handler is kept as the raw `"Controller@action"` string. It is only
/// parsed at dispatch time, so a malformed descriptor registers fine and
/// surfaces when its route is hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub method: Method,
    pub uri: String,
    pub handler: String,
}

impl Route {
    pub fn new(method: impl AsRef<str>, uri: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            method: Method::new(method),
            uri: uri.into(),
            handler: handler.into(),
        }
    }

    /// Literal (method, uri) equality; the method is compared case-insensitively.
    pub fn matches(&self, method: &str, uri: &str) -> bool {
        self.method.matches(method) && self.uri == uri
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.method, self.uri, self.handler)
    }
}

/// One entry of a bulk `group` registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub method: String,
    pub uri: String,
    #[serde(alias = "handler")]
    pub action: String,
}

impl RouteSpec {
    pub fn new(
        method: impl Into<String>,
        uri: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            action: action.into(),
        }
    }
}

/// Join a prefix and a path with exactly one separating slash.
///
/// - trailing slashes on `prefix` are dropped
/// - `uri` gets a single leading slash
/// - a `uri` of `/` (or empty) yields the prefix alone, or `/` when both are empty
pub fn join_paths(prefix: &str, uri: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let tail = uri.trim_start_matches('/');

    match (prefix.is_empty(), tail.is_empty()) {
        (true, true) => "/".to_string(),
        (false, true) => prefix.to_string(),
        (_, false) => format!("{prefix}/{tail}"),
    }
}
