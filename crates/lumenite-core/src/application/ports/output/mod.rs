//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the router needs from the hosting environment.
//! The `lumenite-adapters` crate provides implementations.

use crate::error::LumeniteResult;

/// Port for emitting the HTTP response.
///
/// Implemented by:
/// - `lumenite_adapters::response::MemoryResponse` (testing)
/// - `lumenite_adapters::response::StreamResponse` (stdout / CGI)
///
/// ## Design Notes
///
/// - Methods take `&self`; adapters keep their state behind a lock so a
///   clone can be inspected after the router is done with it
/// - After `finish`, every write must fail with `ApplicationError::ResponseWrite`
#[cfg_attr(test, mockall::automock)]
pub trait ResponseSink: Send + Sync {
    /// Set the status line, e.g. `(404, "Not Found")`.
    fn set_status(&self, code: u16, reason: &str) -> LumeniteResult<()>;

    /// Append bytes to the body.
    fn write_body(&self, body: &[u8]) -> LumeniteResult<()>;

    /// Flush and close the response. No writes are accepted afterwards.
    fn finish(&self) -> LumeniteResult<()>;
}

/// A constructed controller instance.
///
/// Controllers produce their own output by writing to the response; the
/// router does not look at anything they return beyond success or failure.
pub trait Controller: Send {
    /// Whether `action` can be invoked on this instance.
    fn has_action(&self, action: &str) -> bool;

    /// Invoke `action` with no arguments.
    fn call(&mut self, action: &str, response: &dyn ResponseSink) -> LumeniteResult<()>;
}

/// Port for resolving controller types by qualified path
/// (`app::controller::WelcomeController`).
///
/// Implemented by:
/// - `lumenite_adapters::controllers::StaticControllerRegistry`
#[cfg_attr(test, mockall::automock)]
pub trait ControllerRegistry: Send + Sync {
    /// Whether a controller type is registered under `path`.
    fn contains(&self, path: &str) -> bool;

    /// Zero-argument construction; `None` when nothing is registered.
    fn instantiate(&self, path: &str) -> Option<Box<dyn Controller>>;
}

/// Read-only view of the inbound request, as handed over by the host server.
///
/// Implemented by:
/// - `lumenite_adapters::request::CgiRequestContext`
/// - `lumenite_adapters::request::StaticRequestContext`
pub trait RequestContext: Send + Sync {
    /// Request method as received.
    fn method(&self) -> Option<String>;

    /// Request path, without query string or fragment.
    fn path(&self) -> Option<String>;

    /// Request target as received, including the query string.
    fn full_uri(&self) -> Option<String>;
}
