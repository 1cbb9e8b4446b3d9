// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Lumenite.
//!
//! This module contains pure routing logic with no I/O. Responses,
//! controllers and the inbound request are reached through ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: matching and parsing are synchronous
//! - **No I/O**: no writers, sockets or environment reads
//! - **Value semantics**: all domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    error_page::{ErrorMessage, ErrorPage},
    handler::{CONTROLLER_NAMESPACE, CONTROLLER_SUFFIX, HandlerDescriptor, qualify_controller},
    route::{Route, RouteSpec, join_paths},
    route_table::RouteTable,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Method, StatusCode};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn method_normalizes_to_uppercase() {
        assert_eq!(Method::new("get").as_str(), "GET");
        assert_eq!(Method::new(" Patch ").as_str(), "PATCH");
        assert_eq!(Method::from("options"), Method::new("OPTIONS"));
    }

    #[test]
    fn method_keeps_non_standard_verbs() {
        let purge = Method::new("purge");
        assert_eq!(purge.as_str(), "PURGE");
        assert!(!purge.is_standard());
        assert!(Method::new("delete").is_standard());
    }

    #[test]
    fn method_matches_any_casing() {
        let m = Method::new("POST");
        assert!(m.matches("post"));
        assert!(m.matches("PoSt"));
        assert!(!m.matches("put"));
    }

    #[test]
    fn status_codes_round_trip_through_numbers() {
        for code in [400, 401, 403, 404, 500] {
            assert_eq!(StatusCode::from_code(code).map(StatusCode::code), Some(code));
        }
        assert_eq!(StatusCode::from_code(999), None);
        assert_eq!(StatusCode::from_code(200), None);
    }

    #[test]
    fn status_text_pairs_code_and_phrase() {
        assert_eq!(StatusCode::NotFound.status_text(), "404 Not Found");
        assert_eq!(
            StatusCode::InternalServerError.to_string(),
            "500 Internal Server Error"
        );
    }

    // ========================================================================
    // Handler Descriptor Tests
    // ========================================================================

    #[test]
    fn descriptor_splits_on_single_at() {
        let d = HandlerDescriptor::parse("Welcome@index").unwrap();
        assert_eq!(d.controller(), "Welcome");
        assert_eq!(d.action(), "index");
        assert_eq!(d.controller_type(), "WelcomeController");
        assert_eq!(d.controller_path(), "app::controller::WelcomeController");
        assert_eq!(d.to_string(), "Welcome@index");
    }

    #[test]
    fn descriptor_without_separator_is_malformed() {
        let err = HandlerDescriptor::parse("Welcome").unwrap_err();
        assert!(matches!(err, DomainError::MalformedHandler { .. }));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn descriptor_with_two_separators_is_malformed() {
        let err = HandlerDescriptor::parse("Welcome@index@extra").unwrap_err();
        match err {
            DomainError::MalformedHandler { reason, .. } => assert!(reason.contains("more than one")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn descriptor_with_empty_part_is_malformed() {
        assert!(HandlerDescriptor::parse("@index").is_err());
        assert!(HandlerDescriptor::parse("Welcome@").is_err());
    }

    #[test]
    fn qualify_is_idempotent() {
        let once = qualify_controller("UsersController");
        assert_eq!(once, "app::controller::UsersController");
        assert_eq!(qualify_controller(&once), once);
    }

    // ========================================================================
    // Route Table Tests
    // ========================================================================

    fn table(routes: &[(&str, &str, &str)]) -> RouteTable {
        routes
            .iter()
            .map(|(m, u, h)| Route::new(m, *u, *h))
            .collect()
    }

    #[test]
    fn first_registration_wins() {
        let t = table(&[("GET", "/", "First@index"), ("get", "/", "Second@index")]);
        assert_eq!(t.find("GET", "/").unwrap().handler, "First@index");
    }

    #[test]
    fn remove_first_takes_one_entry() {
        let mut t = table(&[("GET", "/", "First@index"), ("GET", "/", "Second@index")]);
        let removed = t.remove_first("get", "/").unwrap();
        assert_eq!(removed.handler, "First@index");
        assert_eq!(t.len(), 1);
        assert_eq!(t.find("GET", "/").unwrap().handler, "Second@index");
        assert!(t.remove_first("GET", "/").is_some());
        assert!(t.remove_first("GET", "/").is_none());
        assert!(t.is_empty());
    }

    #[test]
    fn uri_match_is_literal() {
        let t = table(&[("GET", "/users", "Users@index")]);
        assert!(t.contains("GET", "/users"));
        assert!(!t.contains("GET", "/users/"));
        assert!(!t.contains("GET", "/Users"));
    }

    #[test]
    fn shadowed_reports_later_duplicates() {
        let t = table(&[
            ("GET", "/", "A@a"),
            ("POST", "/", "B@b"),
            ("get", "/", "C@c"),
        ]);
        let shadowed = t.shadowed();
        assert_eq!(shadowed.len(), 1);
        assert!(matches!(
            &shadowed[0],
            DomainError::ShadowedRoute { position: 2, .. }
        ));
    }

    // ========================================================================
    // Path Joining Tests
    // ========================================================================

    #[test]
    fn join_inserts_exactly_one_slash() {
        assert_eq!(join_paths("/admin", "/users"), "/admin/users");
        assert_eq!(join_paths("/admin/", "users"), "/admin/users");
        assert_eq!(join_paths("/admin//", "//users"), "/admin/users");
    }

    #[test]
    fn join_root_uri_yields_prefix() {
        assert_eq!(join_paths("/admin", "/"), "/admin");
        assert_eq!(join_paths("", "/"), "/");
        assert_eq!(join_paths("", "users"), "/users");
    }

    // ========================================================================
    // Error Page Tests
    // ========================================================================

    #[test]
    fn default_page_shows_status_text() {
        let page = ErrorPage::new(StatusCode::NotFound, ErrorMessage::new());
        let html = page.render_html();
        assert!(html.contains("<h1>Error: 404</h1>"));
        assert!(html.contains("<p>404 Not Found</p>"));
    }

    #[test]
    fn overrides_replace_default_text() {
        let page = ErrorPage::new(
            StatusCode::Forbidden,
            ErrorMessage::new().title("Nope").message("Go away"),
        );
        let html = page.render_html();
        assert!(html.contains("Nope"));
        assert!(html.contains("Go away"));
        assert!(!html.contains("403 Forbidden"));
    }

    #[test]
    fn partial_override_keeps_other_default() {
        let page = ErrorPage::new(StatusCode::Unauthorized, ErrorMessage::new().title("Login"));
        assert_eq!(page.heading(), "Login");
        assert_eq!(page.detail(), "401 Unauthorized");
    }

    #[test]
    fn override_text_is_escaped() {
        let page = ErrorPage::new(
            StatusCode::BadRequest,
            ErrorMessage::new().message("<script>alert('x')</script>"),
        );
        let html = page.render_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // ========================================================================
    // Validation Tests
    // ========================================================================

    #[test]
    fn validator_flags_relative_uri() {
        let bad = Route::new("GET", "users", "Users@index");
        assert!(matches!(
            DomainValidator::validate_route(&bad),
            Err(DomainError::InvalidRoute { .. })
        ));
        assert!(DomainValidator::validate_route(&Route::new("GET", "/users", "Users@index")).is_ok());
    }

    #[test]
    fn validator_parses_handler() {
        let route = Route::new("GET", "/", "Welcome@index");
        let descriptor = DomainValidator::validate_handler(&route).unwrap();
        assert_eq!(descriptor.action(), "index");
    }
}
