//! Lumenite request router: route table, dispatch, and error pages.
//!
//! The crate is split the hexagonal way:
//!
//! - [`domain`]: routes, the ordered [`RouteTable`](domain::RouteTable),
//!   `Controller@action` descriptors, status codes and error pages. No I/O.
//! - [`application`]: the [`Router`](application::Router) service, the route
//!   audit, and the ports it drives (`ResponseSink`, `ControllerRegistry`,
//!   `Controller`, `RequestContext`).
//! - [`error`]: [`LumeniteError`](error::LumeniteError), the root error.
//!
//! Concrete responses, registries and request sources live in
//! `lumenite-adapters`.
//!
//! ```rust,no_run
//! use lumenite_core::prelude::*;
//!
//! # fn demo(registry: Box<dyn ControllerRegistry>, response: Box<dyn ResponseSink>) -> LumeniteResult<()> {
//! let mut router = Router::new(registry, response);
//! router.get("/", "Welcome@index");
//!
//! match router.dispatch("GET", "/")? {
//!     DispatchOutcome::Handled { .. } => {}
//!     DispatchOutcome::Halted(page) => eprintln!("halted with {}", page.status()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{
        AuditFinding, DispatchOutcome, Hook, RouteAudit, Router,
        ports::{Controller, ControllerRegistry, RequestContext, ResponseSink},
    };
    pub use crate::domain::{
        ErrorMessage, ErrorPage, HandlerDescriptor, Method, Route, RouteSpec, RouteTable,
        StatusCode,
    };
    pub use crate::error::{LumeniteError, LumeniteResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
