//! File-based route manifest loader.
//!
//! A manifest describes the route table the router is built from on each
//! request. TOML is the primary format; files ending in `.json` are read as
//! JSON with the same shape.
//!
//! # Manifest format
//!
//! ```toml
//! base_path = "/app"            # optional
//!
//! [[routes]]
//! method  = "GET"
//! uri     = "/"
//! handler = "Welcome@index"
//!
//! [[groups]]
//! prefix = "/admin"
//!
//! [[groups.routes]]
//! method = "GET"
//! uri    = "/users"
//! action = "Users@index"       # `handler` is accepted too
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use lumenite_core::{
    application::{ApplicationError, Router},
    domain::{Route, RouteSpec, RouteTable, join_paths},
    error::LumeniteResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised route manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub method: String,
    pub uri: String,
    pub handler: String,
}

/// One `[[groups]]` entry: a prefix and the routes under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub prefix: String,
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

#[derive(Debug, Error)]
enum ManifestError {
    #[error("failed to read: {0}")]
    Read(#[from] io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RouteManifest {
    pub fn from_toml_str(raw: &str) -> LumeniteResult<Self> {
        toml::from_str(raw).map_err(|e| {
            ApplicationError::RouteFile {
                path: PathBuf::from("<inline>"),
                reason: ManifestError::from(e).to_string(),
            }
            .into()
        })
    }

    /// Register everything on `router`: plain routes, then groups, in file
    /// order, then the base path.
    pub fn apply(&self, router: &mut Router) {
        for entry in &self.routes {
            router.add_route(&entry.method, entry.uri.as_str(), entry.handler.as_str());
        }
        for group in &self.groups {
            router.group(&group.prefix, group.routes.iter().cloned());
        }
        if let Some(base_path) = &self.base_path {
            router.set_base_path(base_path);
        }
    }

    /// The table `apply` would register, without a router.
    pub fn table(&self) -> RouteTable {
        let plain = self
            .routes
            .iter()
            .map(|e| Route::new(&e.method, e.uri.as_str(), e.handler.as_str()));
        let grouped = self.groups.iter().flat_map(|g| {
            g.routes.iter().map(move |spec| {
                Route::new(&spec.method, join_paths(&g.prefix, &spec.uri), spec.action.as_str())
            })
        });
        plain.chain(grouped).collect()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len() + self.groups.iter().map(|g| g.routes.len()).sum::<usize>()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`RouteManifest`] from disk.
///
/// # Example
///
/// ```no_run
/// use lumenite_adapters::route_loader::FileRouteLoader;
///
/// let manifest = FileRouteLoader::new("routes.toml").load()?;
/// println!("{} routes", manifest.route_count());
/// # Ok::<(), lumenite_core::error::LumeniteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileRouteLoader {
    path: PathBuf,
}

impl FileRouteLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// [`ApplicationError::RouteFile`] when the file is missing, unreadable
    /// or does not parse.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> LumeniteResult<RouteManifest> {
        let manifest = self.read().map_err(|e| ApplicationError::RouteFile {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        debug!(routes = manifest.route_count(), "loaded route manifest");
        Ok(manifest)
    }

    fn read(&self) -> Result<RouteManifest, ManifestError> {
        let raw = fs::read_to_string(&self.path)?;
        let is_json = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }
}
