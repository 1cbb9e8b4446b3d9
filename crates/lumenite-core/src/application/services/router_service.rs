//! Router - route table ownership and request dispatch.
//!
//! The router answers one request:
//! 1. Match (method, uri) against the route table
//! 2. Parse the `"Controller@action"` descriptor
//! 3. Resolve and construct the controller through the registry
//! 4. Invoke the action, or emit an error page
//!
//! Error pages end the request. `error` finishes the response and hands back
//! [`DispatchOutcome::Halted`]; callers stop there.

use std::fmt;

use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{ControllerRegistry, RequestContext, ResponseSink},
        services::route_audit::RouteAudit,
    },
    domain::{
        DomainError, ErrorMessage, ErrorPage, HandlerDescriptor, Method, Route, RouteSpec,
        RouteTable, StatusCode, join_paths,
    },
    error::LumeniteResult,
};

/// A callback registered through [`Router::before`] / [`Router::after`].
pub type Hook = Box<dyn Fn(&Method, &str) + Send + Sync>;

/// How a dispatched request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The controller action ran and produced the response.
    Handled { controller: String, action: String },
    /// An error page was emitted; nothing else may be written.
    Halted(ErrorPage),
}

impl DispatchOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// Status of the error page, if one was emitted.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Handled { .. } => None,
            Self::Halted(page) => Some(page.status()),
        }
    }
}

/// Request router.
///
/// Holds an insertion-ordered route table and the collaborators needed to
/// answer a request. One router serves one request; build the table once
/// and use [`Router::with_routes`] to share it across requests.
pub struct Router {
    routes: RouteTable,
    before: Vec<Hook>,
    after: Vec<Hook>,
    base_path: String,
    registry: Box<dyn ControllerRegistry>,
    response: Box<dyn ResponseSink>,
    request: Option<Box<dyn RequestContext>>,
}

impl Router {
    /// Create a router with an empty route table.
    pub fn new(registry: Box<dyn ControllerRegistry>, response: Box<dyn ResponseSink>) -> Self {
        Self::with_routes(RouteTable::new(), registry, response)
    }

    /// Create a router around a prebuilt table.
    pub fn with_routes(
        routes: RouteTable,
        registry: Box<dyn ControllerRegistry>,
        response: Box<dyn ResponseSink>,
    ) -> Self {
        Self {
            routes,
            before: Vec::new(),
            after: Vec::new(),
            base_path: String::new(),
            registry,
            response,
            request: None,
        }
    }

    /// Attach the inbound request accessor used by `dispatch_current` and the
    /// `current_*` helpers.
    pub fn with_request_context(mut self, request: Box<dyn RequestContext>) -> Self {
        self.request = Some(request);
        self
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Append a route. The method is upper-cased; nothing else is checked.
    pub fn add_route(
        &mut self,
        method: impl AsRef<str>,
        uri: impl Into<String>,
        handler: impl Into<String>,
    ) -> &mut Self {
        let route = Route::new(method, uri, handler);
        debug!(route = %route, "route registered");
        self.routes.push(route);
        self
    }

    pub fn get(&mut self, uri: impl Into<String>, handler: impl Into<String>) -> &mut Self {
        self.add_route(Method::GET, uri, handler)
    }

    pub fn post(&mut self, uri: impl Into<String>, handler: impl Into<String>) -> &mut Self {
        self.add_route(Method::POST, uri, handler)
    }

    pub fn put(&mut self, uri: impl Into<String>, handler: impl Into<String>) -> &mut Self {
        self.add_route(Method::PUT, uri, handler)
    }

    pub fn delete(&mut self, uri: impl Into<String>, handler: impl Into<String>) -> &mut Self {
        self.add_route(Method::DELETE, uri, handler)
    }

    pub fn patch(&mut self, uri: impl Into<String>, handler: impl Into<String>) -> &mut Self {
        self.add_route(Method::PATCH, uri, handler)
    }

    pub fn head(&mut self, uri: impl Into<String>, handler: impl Into<String>) -> &mut Self {
        self.add_route(Method::HEAD, uri, handler)
    }

    pub fn options(&mut self, uri: impl Into<String>, handler: impl Into<String>) -> &mut Self {
        self.add_route(Method::OPTIONS, uri, handler)
    }

    /// Register every spec with `prefix` joined in front of its uri.
    pub fn group<I>(&mut self, prefix: &str, routes: I) -> &mut Self
    where
        I: IntoIterator<Item = RouteSpec>,
    {
        for spec in routes {
            self.add_route(&spec.method, join_paths(prefix, &spec.uri), spec.action);
        }
        self
    }

    /// Remove the first route matching (method, uri).
    pub fn remove_route(&mut self, method: &str, uri: &str) -> bool {
        match self.routes.remove_first(method, uri) {
            Some(route) => {
                debug!(route = %route, "route removed");
                true
            }
            None => false,
        }
    }

    /// Store a before hook. Hooks are kept but not run by `dispatch`.
    pub fn before(&mut self, hook: impl Fn(&Method, &str) + Send + Sync + 'static) -> &mut Self {
        self.before.push(Box::new(hook));
        self
    }

    /// Store an after hook. Hooks are kept but not run by `dispatch`.
    pub fn after(&mut self, hook: impl Fn(&Method, &str) + Send + Sync + 'static) -> &mut Self {
        self.after.push(Box::new(hook));
        self
    }

    /// Number of registered (before, after) hooks.
    pub fn hook_counts(&self) -> (usize, usize) {
        (self.before.len(), self.after.len())
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn route_exists(&self, method: &str, uri: &str) -> bool {
        self.routes.contains(method, uri)
    }

    /// Handler descriptor of the first matching route.
    pub fn route_handler(&self, method: &str, uri: &str) -> Option<&str> {
        self.routes.find(method, uri).map(|r| r.handler.as_str())
    }

    pub fn routes(&self) -> &[Route] {
        self.routes.as_slice()
    }

    pub fn route_table(&self) -> &RouteTable {
        &self.routes
    }

    // -------------------------------------------------------------------------
    // Base path and request introspection
    // -------------------------------------------------------------------------

    /// Trailing slashes are dropped. Never consulted while matching.
    pub fn set_base_path(&mut self, base_path: &str) -> &mut Self {
        self.base_path = base_path.trim_end_matches('/').to_string();
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// `uri` under the base path, joined like `group` joins prefixes.
    pub fn path_for(&self, uri: &str) -> String {
        join_paths(&self.base_path, uri)
    }

    pub fn current_method(&self) -> Option<String> {
        self.request.as_deref().and_then(|r| r.method())
    }

    pub fn current_uri(&self) -> Option<String> {
        self.request.as_deref().and_then(|r| r.path())
    }

    pub fn full_uri(&self) -> Option<String> {
        self.request.as_deref().and_then(|r| r.full_uri())
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Drive one request through the table.
    ///
    /// Client-visible failures (no route, unknown controller, missing action)
    /// come back as `Ok(DispatchOutcome::Halted)` after the error page is
    /// written. `Err` means a configuration or infrastructure defect; in that
    /// case nothing has been written by the router.
    #[instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    pub fn dispatch(&self, method: &str, uri: &str) -> LumeniteResult<DispatchOutcome> {
        let Some(handler) = self.route_handler(method, uri) else {
            warn!("no route matched");
            return self.error(StatusCode::NotFound.code(), ErrorMessage::new());
        };

        let descriptor = HandlerDescriptor::parse(handler).inspect_err(|e| {
            error!(error = %e, "route has a malformed handler descriptor");
        })?;

        let controller_path = descriptor.controller_path();
        let Some(mut controller) = self.registry.instantiate(&controller_path) else {
            // Server-side defect, answered as 404.
            let defect = DomainError::ControllerNotRegistered {
                controller: controller_path,
            };
            warn!(error = %defect, category = "configuration", "controller not resolved");
            return self.error(StatusCode::NotFound.code(), ErrorMessage::new());
        };

        if !controller.has_action(descriptor.action()) {
            let defect = DomainError::ActionNotFound {
                controller: descriptor.controller_type(),
                action: descriptor.action().to_string(),
            };
            warn!(error = %defect, "action not resolved");
            return self.error(
                StatusCode::InternalServerError.code(),
                ErrorMessage::new().message(format!("Action {} not found.", descriptor.action())),
            );
        }

        controller
            .call(descriptor.action(), self.response.as_ref())
            .map_err(|e| ApplicationError::ActionFailed {
                controller: descriptor.controller_type(),
                action: descriptor.action().to_string(),
                reason: e.to_string(),
            })?;
        self.response.finish()?;

        info!(handler = %descriptor, "request handled");
        Ok(DispatchOutcome::Handled {
            controller: descriptor.controller_type(),
            action: descriptor.action().to_string(),
        })
    }

    /// Dispatch the request described by the attached request context.
    pub fn dispatch_current(&self) -> LumeniteResult<DispatchOutcome> {
        let request = self
            .request
            .as_deref()
            .ok_or(ApplicationError::AdapterNotConfigured {
                name: "RequestContext",
            })?;

        let method = request
            .method()
            .ok_or(ApplicationError::RequestUnavailable { field: "method" })?;
        let path = request
            .path()
            .ok_or(ApplicationError::RequestUnavailable { field: "uri" })?;

        self.dispatch(&method, &path)
    }

    /// Emit an error page and end the response.
    ///
    /// Unrecognized codes fall back to a plain 400 page (overrides dropped).
    #[instrument(skip(self))]
    pub fn error(&self, code: u16, message: ErrorMessage) -> LumeniteResult<DispatchOutcome> {
        let Some(status) = StatusCode::from_code(code) else {
            debug!(code, "unrecognized status code, falling back to 400");
            return self.error(StatusCode::BadRequest.code(), ErrorMessage::new());
        };

        let page = ErrorPage::new(status, message);
        self.response
            .set_status(status.code(), status.reason_phrase())?;
        self.response.write_body(page.render_html().as_bytes())?;
        self.response.finish()?;

        warn!(status = %status, "request halted with error page");
        Ok(DispatchOutcome::Halted(page))
    }

    // -------------------------------------------------------------------------
    // Audit
    // -------------------------------------------------------------------------

    /// Check every route against the descriptor rules and the registry.
    pub fn audit(&self) -> RouteAudit {
        RouteAudit::run(&self.routes, self.registry.as_ref())
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("before_hooks", &self.before.len())
            .field("after_hooks", &self.after.len())
            .field("base_path", &self.base_path)
            .field("has_request_context", &self.request.is_some())
            .finish_non_exhaustive()
    }
}
