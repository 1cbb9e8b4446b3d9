//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "answer this request" or "audit this table".

pub mod route_audit;
pub mod router_service;

pub use route_audit::{AuditFinding, RouteAudit};
pub use router_service::{DispatchOutcome, Hook, Router};
