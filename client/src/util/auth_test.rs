use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use access::{DASHBOARD_ROUTE, LayoutChrome, SessionUser};

fn session(email: &str) -> Session {
    Session {
        user: SessionUser { id: "u1".to_owned(), email: Some(email.to_owned()) },
        expires_at: None,
    }
}

/// Observer sink that mirrors what the layout signal does: apply, and
/// count a render only when the state actually changed.
#[derive(Clone, Default)]
struct Sink {
    inner: Arc<Mutex<(SessionState, usize)>>,
}

impl Sink {
    fn apply(&self, event: &AuthEvent) {
        let mut guard = self.inner.lock().unwrap();
        if guard.0.apply_event(event) {
            guard.1 += 1;
        }
    }

    fn resolve(&self, snapshot: Option<Session>) {
        let mut guard = self.inner.lock().unwrap();
        if guard.0.resolve_initial(snapshot) {
            guard.1 += 1;
        }
    }

    fn state(&self) -> SessionState {
        self.inner.lock().unwrap().0.clone()
    }

    fn renders(&self) -> usize {
        self.inner.lock().unwrap().1
    }
}

fn attach(bus: &AuthEventBus, sink: &Sink) -> SessionObserver {
    let sink = sink.clone();
    SessionObserver::attach(bus, move |event| sink.apply(event))
}

// =============================================================================
// SessionObserver
// =============================================================================

#[test]
fn observer_applies_events_from_the_bus() {
    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let _observer = attach(&bus, &sink);

    bus.publish(&AuthEvent::signed_in(session("a@b.com")));
    assert_eq!(sink.state(), SessionState::Authenticated(session("a@b.com")));
}

#[test]
fn repeated_event_renders_once() {
    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let _observer = attach(&bus, &sink);

    let event = AuthEvent::signed_in(session("a@b.com"));
    bus.publish(&event);
    bus.publish(&event);
    assert_eq!(sink.renders(), 1);
}

#[test]
fn dropped_observer_unsubscribes_and_ignores_events() {
    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let observer = attach(&bus, &sink);
    assert_eq!(bus.listener_count(), 1);

    drop(observer);
    assert_eq!(bus.listener_count(), 0);
    bus.publish(&AuthEvent::signed_in(session("a@b.com")));
    assert!(sink.state().is_loading());
}

#[test]
fn snapshot_arriving_after_unmount_is_discarded() {
    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let observer = attach(&bus, &sink);
    let scope = observer.scope();

    drop(observer);
    let delivered = apply_snapshot(&scope, Some(session("late@b.com")), |snapshot| sink.resolve(snapshot));
    assert!(!delivered);
    assert!(sink.state().is_loading());
    assert_eq!(sink.renders(), 0);
}

#[test]
fn snapshot_for_a_mounted_observer_resolves_loading() {
    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let observer = attach(&bus, &sink);

    let delivered = apply_snapshot(&observer.scope(), Some(session("a@b.com")), |snapshot| sink.resolve(snapshot));
    assert!(delivered);
    assert_eq!(sink.state(), SessionState::Authenticated(session("a@b.com")));

    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let observer = attach(&bus, &sink);
    apply_snapshot(&observer.scope(), None, |snapshot| sink.resolve(snapshot));
    assert_eq!(sink.state(), SessionState::Anonymous);
}

#[test]
fn snapshot_arriving_after_an_event_is_discarded() {
    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let _observer = attach(&bus, &sink);

    bus.publish(&AuthEvent::signed_out());
    sink.resolve(Some(session("stale@b.com")));
    assert_eq!(sink.state(), SessionState::Anonymous);
}

// =============================================================================
// client_redirect
// =============================================================================

#[test]
fn client_redirect_waits_for_the_snapshot() {
    assert_eq!(client_redirect(&SessionState::Loading, DASHBOARD_ROUTE), None);
}

#[test]
fn client_redirect_follows_the_shared_policy() {
    let signed_in = SessionState::Authenticated(session("a@b.com"));
    assert_eq!(client_redirect(&signed_in, "/auth"), Some(DASHBOARD_ROUTE));
    assert_eq!(client_redirect(&signed_in, DASHBOARD_ROUTE), None);

    assert_eq!(client_redirect(&SessionState::Anonymous, DASHBOARD_ROUTE), Some("/auth"));
    assert_eq!(client_redirect(&SessionState::Anonymous, "/about"), None);
    assert_eq!(client_redirect(&SessionState::Anonymous, "/"), None);
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn sign_out_event_hides_chrome_on_the_next_render() {
    let bus = AuthEventBus::new();
    let sink = Sink::default();
    let _observer = attach(&bus, &sink);

    bus.publish(&AuthEvent::signed_in(session("a@b.com")));
    let chrome = LayoutChrome::derive(sink.state().session(), DASHBOARD_ROUTE);
    assert!(chrome.sidebar);

    bus.publish(&AuthEvent::signed_out());
    let chrome = LayoutChrome::derive(sink.state().session(), DASHBOARD_ROUTE);
    assert!(!chrome.sidebar);
    assert!(chrome.identity.is_none());
    assert_eq!(client_redirect(&sink.state(), DASHBOARD_ROUTE), Some("/auth"));
}

#[test]
fn logout_navigates_to_root() {
    let mut navigated = None;
    block_on(sign_out_and_leave(async { Ok(()) }, |path| navigated = Some(path.to_owned())));
    assert_eq!(navigated.as_deref(), Some("/"));
}

#[test]
fn failed_sign_out_still_navigates() {
    let mut navigated = None;
    block_on(sign_out_and_leave(async { Err("network down".to_owned()) }, |path| {
        navigated = Some(path.to_owned());
    }));
    assert_eq!(navigated.as_deref(), Some("/"));
}

// =============================================================================
// storage markers
// =============================================================================

#[test]
fn storage_marker_carries_kind_and_timestamp() {
    assert_eq!(storage_marker(AuthEventKind::SignedOut, 42), "signed_out:42");
    assert_eq!(parse_storage_marker("signed_out:42"), Some(AuthEventKind::SignedOut));
    assert_eq!(parse_storage_marker("signed_in:1"), Some(AuthEventKind::SignedIn));
}

#[test]
fn storage_marker_rejects_foreign_values() {
    assert_eq!(parse_storage_marker("signed_out"), None);
    assert_eq!(parse_storage_marker("dark_mode:1"), None);
    assert_eq!(parse_storage_marker(""), None);
}
