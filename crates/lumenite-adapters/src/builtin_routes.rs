//! Built-in route table and controllers.
//!
//! Used when no manifest is configured: a single `GET /` route served by
//! [`WelcomeController`].

use std::path::Path;

use tracing::{debug, instrument};

use lumenite_core::error::LumeniteResult;

use crate::{
    controllers::{StaticControllerRegistry, WelcomeController},
    route_loader::{FileRouteLoader, RouteEntry, RouteManifest},
};

pub const DEFAULT_HANDLER: &str = "Welcome@index";

/// The default manifest: `GET / -> Welcome@index`.
pub fn default_manifest() -> RouteManifest {
    RouteManifest {
        base_path: None,
        routes: vec![RouteEntry {
            method: "GET".into(),
            uri: "/".into(),
            handler: DEFAULT_HANDLER.into(),
        }],
        groups: Vec::new(),
    }
}

/// Registry holding every controller that ships with Lumenite.
pub fn builtin_registry() -> LumeniteResult<StaticControllerRegistry> {
    StaticControllerRegistry::new().with::<WelcomeController>()
}

/// Load the manifest at `path`, or fall back to [`default_manifest`].
#[instrument]
pub fn load_manifest(path: Option<&Path>) -> LumeniteResult<RouteManifest> {
    match path {
        Some(path) => FileRouteLoader::new(path).load(),
        None => {
            debug!("no route file configured, using built-in routes");
            Ok(default_manifest())
        }
    }
}
