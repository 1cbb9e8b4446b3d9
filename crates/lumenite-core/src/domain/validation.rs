use crate::domain::{
    entities::{HandlerDescriptor, Route},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Registration itself never validates; these checks back the route audit
/// and the dispatch-time descriptor parse.
pub struct DomainValidator;

impl DomainValidator {
    /// Parse the route's handler descriptor.
    pub fn validate_handler(route: &Route) -> Result<HandlerDescriptor, DomainError> {
        HandlerDescriptor::parse(&route.handler)
    }

    /// Structural checks that are legal at registration but can never match
    /// a real request.
    pub fn validate_route(route: &Route) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidRoute {
            method: route.method.to_string(),
            uri: route.uri.clone(),
            reason: reason.to_string(),
        };

        if route.method.as_str().is_empty() {
            return Err(invalid("method is empty"));
        }
        if !route.uri.starts_with('/') {
            return Err(invalid("uri does not start with '/'"));
        }
        Ok(())
    }
}
