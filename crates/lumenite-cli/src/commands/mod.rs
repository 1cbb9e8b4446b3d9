//! Command handlers, one module per subcommand.
//!
//! Every handler that needs a router builds it the same way: resolve the
//! manifest (flag, then config, then built-in), register the built-in
//! controllers, apply the manifest, then apply the base-path override.

pub mod cgi;
pub mod check;
pub mod completions;
pub mod config;
pub mod dispatch;
pub mod error_page;
pub mod init;
pub mod routes;

use std::path::PathBuf;

use tracing::debug;

use lumenite_adapters::{builtin_routes, route_loader::RouteManifest};
use lumenite_core::{application::ports::ResponseSink, prelude::Router};

use crate::{
    cli::RouteSource,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Manifest path from the flag, falling back to `routes.file`.
pub(crate) fn manifest_path(source: &RouteSource, config: &AppConfig) -> Option<PathBuf> {
    source.routes.clone().or_else(|| config.routes.file.clone())
}

/// Load the manifest the command should use.
pub(crate) fn load_manifest(source: &RouteSource, config: &AppConfig) -> CliResult<RouteManifest> {
    let path = manifest_path(source, config);
    if let Some(path) = &path {
        if !path.exists() {
            return Err(CliError::RouteFileNotFound { path: path.clone() });
        }
    }
    Ok(builtin_routes::load_manifest(path.as_deref())?)
}

/// Build a router over the built-in controllers for one request.
pub(crate) fn build_router(
    source: &RouteSource,
    config: &AppConfig,
    response: Box<dyn ResponseSink>,
) -> CliResult<Router> {
    let manifest = load_manifest(source, config)?;
    let registry = builtin_routes::builtin_registry()?;

    let mut router = Router::new(Box::new(registry), response);
    manifest.apply(&mut router);

    if let Some(base_path) = source
        .base_path
        .as_deref()
        .or(config.routes.base_path.as_deref())
    {
        router.set_base_path(base_path);
    }

    debug!(
        routes = router.routes().len(),
        base_path = router.base_path(),
        "router ready"
    );
    Ok(router)
}
