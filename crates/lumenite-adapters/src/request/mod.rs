//! Request context adapters.

mod cgi;

pub use cgi::{CgiRequestContext, StaticRequestContext};
