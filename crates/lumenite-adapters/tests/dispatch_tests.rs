//! End-to-end dispatch through the real adapters.

use std::cell::Cell;

use lumenite_adapters::{
    ActionController, Actions, CgiRequestContext, MemoryResponse, ResponseStyle,
    StaticControllerRegistry, StreamResponse, WelcomeController,
    builtin_routes::{builtin_registry, default_manifest},
    controllers::Action,
    route_loader::RouteManifest,
};
use lumenite_core::{
    application::{ApplicationError, ports::ResponseSink},
    domain::DomainError,
    error::{LumeniteError, LumeniteResult},
    prelude::*,
};

thread_local! {
    static USER_INDEX_CALLS: Cell<usize> = const { Cell::new(0) };
}

#[derive(Default)]
struct UsersController;

impl UsersController {
    fn index(&mut self, response: &dyn ResponseSink) -> LumeniteResult<()> {
        USER_INDEX_CALLS.with(|c| c.set(c.get() + 1));
        response.write_body(b"<ul><li>ada</li></ul>")
    }
}

impl Actions for UsersController {
    const NAME: &'static str = "UsersController";
    const ACTIONS: &'static [(&'static str, Action<Self>)] = &[("index", Self::index)];
}

fn registry() -> StaticControllerRegistry {
    builtin_registry()
        .and_then(|r| r.with::<UsersController>())
        .unwrap()
}

fn router_with(routes: &[(&str, &str, &str)]) -> (Router, MemoryResponse) {
    let response = MemoryResponse::new();
    let mut router = Router::new(Box::new(registry()), Box::new(response.clone()));
    for (method, uri, handler) in routes {
        router.add_route(method, *uri, *handler);
    }
    (router, response)
}

#[test]
fn welcome_route_dispatches_to_builtin_controller() {
    let (router, response) = router_with(&[("GET", "/", "Welcome@index")]);

    let outcome = router.dispatch("GET", "/").unwrap();

    assert!(outcome.is_handled());
    assert_eq!(response.status(), None);
    assert!(response.body_text().contains("Welcome to Lumenite!"));
    assert!(response.is_finished());
}

#[test]
fn action_runs_exactly_once() {
    let (router, response) = router_with(&[("GET", "/users", "Users@index")]);
    let before = USER_INDEX_CALLS.with(Cell::get);

    router.dispatch("get", "/users").unwrap();

    assert_eq!(USER_INDEX_CALLS.with(Cell::get) - before, 1);
    assert_eq!(response.body_text(), "<ul><li>ada</li></ul>");
}

#[test]
fn missing_route_emits_404_page() {
    let (router, response) = router_with(&[("GET", "/", "Welcome@index")]);

    let outcome = router.dispatch("GET", "/missing").unwrap();

    assert_eq!(outcome.status(), Some(StatusCode::NotFound));
    assert_eq!(response.status(), Some(404));
    assert_eq!(response.reason().as_deref(), Some("Not Found"));
    assert!(response.body_text().contains("404 Not Found"));
}

#[test]
fn unregistered_controller_emits_404_page() {
    let (router, response) = router_with(&[("GET", "/", "Ghost@index")]);
    router.dispatch("GET", "/").unwrap();
    assert_eq!(response.status(), Some(404));
}

#[test]
fn missing_action_emits_500_page() {
    let (router, response) = router_with(&[("GET", "/", "Welcome@missing")]);
    router.dispatch("GET", "/").unwrap();
    assert_eq!(response.status(), Some(500));
    assert!(response.body_text().contains("Action missing not found."));
}

#[test]
fn malformed_descriptor_is_an_error_and_writes_nothing() {
    let (router, response) = router_with(&[("GET", "/", "Welcome")]);

    let err = router.dispatch("GET", "/").unwrap_err();

    assert!(matches!(
        err,
        LumeniteError::Domain(DomainError::MalformedHandler { .. })
    ));
    assert_eq!(response.status(), None);
    assert!(response.body().is_empty());
    assert!(!response.is_finished());
}

#[test]
fn error_999_matches_error_400() {
    let (router, fallback) = router_with(&[]);
    router
        .error(999, ErrorMessage::new().title("x").message("y"))
        .unwrap();

    let (router, plain) = router_with(&[]);
    router.error(400, ErrorMessage::new()).unwrap();

    assert_eq!(fallback.status(), plain.status());
    assert_eq!(fallback.body(), plain.body());
}

#[test]
fn error_overrides_show_in_body() {
    let (router, response) = router_with(&[]);
    router
        .error(403, ErrorMessage::new().title("Nope").message("Go away"))
        .unwrap();

    let body = response.body_text();
    assert_eq!(response.status(), Some(403));
    assert!(body.contains("Nope") && body.contains("Go away"));
    assert!(!body.contains("403 Forbidden"));
}

#[test]
fn manifest_builds_the_router() {
    let manifest = RouteManifest::from_toml_str(
        r#"
base_path = "/app/"

[[routes]]
method = "GET"
uri = "/"
handler = "Welcome@index"

[[groups]]
prefix = "/admin/"

[[groups.routes]]
method = "GET"
uri = "/"
action = "Users@index"
"#,
    )
    .unwrap();

    let (mut router, response) = router_with(&[]);
    manifest.apply(&mut router);

    assert_eq!(router.base_path(), "/app");
    assert_eq!(router.route_handler("GET", "/admin"), Some("Users@index"));
    assert!(router.dispatch("GET", "/admin").unwrap().is_handled());
    assert!(response.body_text().contains("ada"));
}

#[test]
fn shared_table_serves_independent_requests() {
    let table = default_manifest().table();

    for uri in ["/", "/nope"] {
        let response = MemoryResponse::new();
        let router = Router::with_routes(
            table.clone(),
            Box::new(registry()),
            Box::new(response.clone()),
        );
        router.dispatch("GET", uri).unwrap();
        assert_eq!(response.status().is_none(), uri == "/");
    }
}

#[test]
fn cgi_stream_frames_error_page_with_status_header() {
    let sink = StreamResponse::new(Vec::new(), ResponseStyle::Cgi);
    let router = Router::new(Box::new(registry()), Box::new(sink));
    let outcome = router.error(404, ErrorMessage::new()).unwrap();
    assert_eq!(outcome.status(), Some(StatusCode::NotFound));

    let sink = StreamResponse::new(Vec::new(), ResponseStyle::Cgi);
    sink.set_status(404, "Not Found").unwrap();
    sink.finish().unwrap();
    let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert!(text.starts_with("Status: 404 Not Found\r\n"));
}

#[test]
fn dispatch_current_reads_cgi_variables() {
    let response = MemoryResponse::new();
    let ctx = CgiRequestContext::from_vars([("REQUEST_METHOD", "GET"), ("REQUEST_URI", "/?x=1")]);
    let mut router = Router::new(Box::new(registry()), Box::new(response.clone()))
        .with_request_context(Box::new(ctx));
    router.get("/", "Welcome@index");

    assert!(router.dispatch_current().unwrap().is_handled());
    assert_eq!(router.current_uri().as_deref(), Some("/"));
    assert_eq!(router.full_uri().as_deref(), Some("/?x=1"));
    assert!(response.body_text().contains("Welcome"));
}

#[test]
fn second_error_after_halt_is_rejected() {
    let (router, _response) = router_with(&[]);
    router.error(404, ErrorMessage::new()).unwrap();

    let err = router.error(500, ErrorMessage::new()).unwrap_err();
    assert!(matches!(
        err,
        LumeniteError::Application(ApplicationError::ResponseWrite { .. })
    ));
}

#[test]
fn action_controller_exposes_table() {
    let controller = ActionController::<WelcomeController>::default();
    assert!(controller.has_action("index"));
    assert!(!controller.has_action("show"));
}
