//! Integration tests for lumenite-core, driving the public API only.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use lumenite_core::prelude::*;

#[derive(Clone, Default)]
struct Captured {
    inner: Arc<Mutex<(Option<u16>, String)>>,
}

impl ResponseSink for Captured {
    fn set_status(&self, code: u16, _reason: &str) -> LumeniteResult<()> {
        self.inner.lock().unwrap().0 = Some(code);
        Ok(())
    }

    fn write_body(&self, body: &[u8]) -> LumeniteResult<()> {
        self.inner
            .lock()
            .unwrap()
            .1
            .push_str(&String::from_utf8_lossy(body));
        Ok(())
    }

    fn finish(&self) -> LumeniteResult<()> {
        Ok(())
    }
}

struct Pages {
    calls: Arc<AtomicUsize>,
}

impl Controller for Pages {
    fn has_action(&self, action: &str) -> bool {
        action == "show"
    }

    fn call(&mut self, _action: &str, response: &dyn ResponseSink) -> LumeniteResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        response.write_body(b"page")
    }
}

struct OneController {
    calls: Arc<AtomicUsize>,
}

impl ControllerRegistry for OneController {
    fn contains(&self, path: &str) -> bool {
        path == "app::controller::PagesController"
    }

    fn instantiate(&self, path: &str) -> Option<Box<dyn Controller>> {
        self.contains(path).then(|| {
            Box::new(Pages {
                calls: Arc::clone(&self.calls),
            }) as Box<dyn Controller>
        })
    }
}

fn router() -> (Router, Captured, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let sink = Captured::default();
    let router = Router::new(
        Box::new(OneController {
            calls: Arc::clone(&calls),
        }),
        Box::new(sink.clone()),
    );
    (router, sink, calls)
}

#[test]
fn test_grouped_route_dispatches_to_registered_controller() {
    let (mut router, sink, calls) = router();
    router.group(
        "/docs/",
        [
            RouteSpec::new("GET", "/", "Pages@show"),
            RouteSpec::new("GET", "intro", "Pages@show"),
        ],
    );

    assert!(router.route_exists("get", "/docs"));
    assert!(router.route_exists("GET", "/docs/intro"));

    let outcome = router.dispatch("GET", "/docs/intro").unwrap();
    assert!(outcome.is_handled());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.inner.lock().unwrap().1, "page");
}

#[test]
fn test_unknown_route_halts_with_not_found_page() {
    let (router, sink, calls) = router();

    let outcome = router.dispatch("GET", "/missing").unwrap();

    match outcome {
        DispatchOutcome::Halted(page) => assert_eq!(page.status(), StatusCode::NotFound),
        other => panic!("expected a halt, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    let captured = sink.inner.lock().unwrap();
    assert_eq!(captured.0, Some(404));
    assert!(captured.1.contains("404 Not Found"));
}

#[test]
fn test_audit_flags_defective_table() {
    let (mut router, _sink, _calls) = router();
    router
        .add_route("GET", "/", "Pages@show")
        .add_route("GET", "/", "Pages@show")
        .add_route("GET", "/x", "Pages@hide")
        .add_route("GET", "/y", "Nobody@show")
        .add_route("GET", "/z", "no-separator");

    let audit = router.audit();

    assert_eq!(audit.checked, 5);
    assert!(!audit.is_clean());
    assert_eq!(audit.findings.len(), 4);
    assert_eq!(
        audit.findings.iter().map(|f| f.position).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}
