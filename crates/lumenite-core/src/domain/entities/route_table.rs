//! Insertion-ordered route table.
//!
//! # Invariants
//!
//! - Order is registration order; lookups scan front to back.
//! - Duplicate (method, uri) pairs are allowed. Only the first is reachable.
//! - Removal takes out at most one entry.

use serde::{Deserialize, Serialize};

use crate::domain::{entities::route::Route, error::DomainError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. No uniqueness check.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// First route matching (method, uri) in insertion order.
    pub fn find(&self, method: &str, uri: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.matches(method, uri))
    }

    pub fn contains(&self, method: &str, uri: &str) -> bool {
        self.find(method, uri).is_some()
    }

    /// Remove the first matching route, returning it.
    pub fn remove_first(&mut self, method: &str, uri: &str) -> Option<Route> {
        let index = self.routes.iter().position(|r| r.matches(method, uri))?;
        Some(self.routes.remove(index))
    }

    pub fn as_slice(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Every route that can never be dispatched because an earlier entry
    /// shares its (method, uri). `position` is the shadowed route's index.
    pub fn shadowed(&self) -> Vec<DomainError> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(index, route)| {
                self.routes[..*index]
                    .iter()
                    .any(|earlier| earlier.method == route.method && earlier.uri == route.uri)
            })
            .map(|(position, route)| DomainError::ShadowedRoute {
                method: route.method.to_string(),
                uri: route.uri.clone(),
                position,
            })
            .collect()
    }
}

impl FromIterator<Route> for RouteTable {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
