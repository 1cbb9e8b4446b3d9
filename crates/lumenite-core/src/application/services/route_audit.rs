//! Static checks over a route table.
//!
//! Registration never validates, so a table can hold routes that will never
//! dispatch cleanly. The audit walks the table once and reports them.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::ControllerRegistry,
    domain::{DomainError, DomainValidator, Route, RouteTable},
};

/// One problem found on one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditFinding {
    /// Position of the route in the table.
    pub position: usize,
    pub route: Route,
    #[serde(serialize_with = "serialize_display")]
    pub error: DomainError,
}

fn serialize_display<S>(error: &DomainError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(error)
}

/// Result of auditing a table against a controller registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteAudit {
    pub checked: usize,
    pub findings: Vec<AuditFinding>,
}

impl RouteAudit {
    /// Check every route, in table order.
    ///
    /// Per route: structural validity, shadowing by an earlier entry, the
    /// handler descriptor, controller registration, and finally whether the
    /// controller exposes the action. Checks after a failed descriptor parse
    /// or a missing controller are skipped for that route.
    #[instrument(skip_all, fields(routes = table.len()))]
    pub fn run(table: &RouteTable, registry: &dyn ControllerRegistry) -> Self {
        let mut findings = Vec::new();
        let shadowed = table.shadowed();

        for (position, route) in table.iter().enumerate() {
            let mut report = |error: DomainError| {
                findings.push(AuditFinding {
                    position,
                    route: route.clone(),
                    error,
                });
            };

            if let Err(e) = DomainValidator::validate_route(route) {
                report(e);
            }

            if let Some(e) = shadowed.iter().find(|e| {
                matches!(e, DomainError::ShadowedRoute { position: p, .. } if *p == position)
            }) {
                report(e.clone());
            }

            let descriptor = match DomainValidator::validate_handler(route) {
                Ok(d) => d,
                Err(e) => {
                    report(e);
                    continue;
                }
            };

            let path = descriptor.controller_path();
            let Some(controller) = registry.instantiate(&path) else {
                report(DomainError::ControllerNotRegistered { controller: path });
                continue;
            };

            if !controller.has_action(descriptor.action()) {
                report(DomainError::ActionNotFound {
                    controller: descriptor.controller_type(),
                    action: descriptor.action().to_string(),
                });
            }
        }

        debug!(findings = findings.len(), "route audit complete");
        Self {
            checked: table.len(),
            findings,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
