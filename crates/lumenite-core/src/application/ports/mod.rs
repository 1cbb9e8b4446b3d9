//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `lumenite-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the router, implemented by infrastructure
//!   - `ResponseSink`: status line + body writer
//!   - `ControllerRegistry` / `Controller`: controller resolution and invocation
//!   - `RequestContext`: read-only view of the inbound request
//!
//! - **Driving (Input) Ports**: `Router::dispatch` / `Router::dispatch_current`

pub mod output;

pub use output::{Controller, ControllerRegistry, RequestContext, ResponseSink};
