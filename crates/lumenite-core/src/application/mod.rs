//! Application layer for Lumenite.
//!
//! This layer contains:
//! - **Services**: the `Router` and the route audit
//! - **Ports**: Interface definitions (traits) for responses, controllers
//!   and the inbound request
//! - **Errors**: Application-specific error types
//!
//! Matching rules and descriptor parsing live in `crate::domain`; this layer
//! wires them to the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AuditFinding, DispatchOutcome, Hook, RouteAudit, Router};

pub use ports::{Controller, ControllerRegistry, RequestContext, ResponseSink};

pub use error::ApplicationError;
