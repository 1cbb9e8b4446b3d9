//! Response sink adapters.

mod memory;
mod stream;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use memory::MemoryResponse;
pub use stream::StreamResponse;

/// How the status line is framed on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStyle {
    /// `HTTP/1.1 404 Not Found`
    #[default]
    Http,
    /// `Status: 404 Not Found`, for CGI hosts.
    Cgi,
}

impl ResponseStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Cgi => "cgi",
        }
    }
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "cgi" => Ok(Self::Cgi),
            other => Err(format!("unknown response style '{other}' (expected http or cgi)")),
        }
    }
}
