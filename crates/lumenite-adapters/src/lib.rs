//! Infrastructure adapters for Lumenite.
//!
//! This crate implements the ports defined in `lumenite-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_routes;
pub mod controllers;
pub mod request;
pub mod response;
pub mod route_loader;

// Re-export commonly used adapters
pub use controllers::{ActionController, Actions, StaticControllerRegistry, WelcomeController};
pub use request::{CgiRequestContext, StaticRequestContext};
pub use response::{MemoryResponse, ResponseStyle, StreamResponse};
pub use route_loader::{FileRouteLoader, RouteManifest};
