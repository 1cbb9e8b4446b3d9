//! Request contexts backed by CGI variables or fixed values.

use std::collections::HashMap;

use lumenite_core::application::ports::RequestContext;

pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
pub const REQUEST_URI: &str = "REQUEST_URI";
pub const PATH_INFO: &str = "PATH_INFO";

/// Reads the request from CGI meta-variables.
///
/// `REQUEST_URI` is preferred; `PATH_INFO` is the fallback for hosts that do
/// not set it.
#[derive(Debug, Clone, Default)]
pub struct CgiRequestContext {
    vars: HashMap<String, String>,
}

impl CgiRequestContext {
    /// Snapshot the CGI variables of the current process.
    pub fn from_env() -> Self {
        Self::from_vars(
            [REQUEST_METHOD, REQUEST_URI, PATH_INFO]
                .into_iter()
                .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v))),
        )
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

impl RequestContext for CgiRequestContext {
    fn method(&self) -> Option<String> {
        self.var(REQUEST_METHOD).map(str::to_string)
    }

    fn path(&self) -> Option<String> {
        self.full_uri().map(|uri| strip_query(&uri).to_string())
    }

    fn full_uri(&self) -> Option<String> {
        self.var(REQUEST_URI)
            .or_else(|| self.var(PATH_INFO))
            .map(str::to_string)
    }
}

/// Fixed method and target, for tests and the `dispatch` command.
#[derive(Debug, Clone)]
pub struct StaticRequestContext {
    method: String,
    uri: String,
}

impl StaticRequestContext {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
        }
    }
}

impl RequestContext for StaticRequestContext {
    fn method(&self) -> Option<String> {
        Some(self.method.clone())
    }

    fn path(&self) -> Option<String> {
        Some(strip_query(&self.uri).to_string())
    }

    fn full_uri(&self) -> Option<String> {
        Some(self.uri.clone())
    }
}

/// Path part of a request target: everything before `?` or `#`.
pub fn strip_query(uri: &str) -> &str {
    uri.split(['?', '#']).next().unwrap_or(uri)
}
