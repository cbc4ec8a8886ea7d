use std::sync::atomic::AtomicUsize;

use super::*;
use access::{Session, SessionUser};

fn session() -> Session {
    Session { user: SessionUser { id: "u1".to_owned(), email: None }, expires_at: None }
}

fn counter(bus: &AuthEventBus) -> (AuthSubscription, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&hits);
    let sub = bus.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (sub, hits)
}

#[test]
fn publish_reaches_every_listener() {
    let bus = AuthEventBus::new();
    let (_a, hits_a) = counter(&bus);
    let (_b, hits_b) = counter(&bus);

    bus.publish(&AuthEvent::signed_in(session()));
    assert_eq!(hits_a.load(Ordering::SeqCst), 1);
    assert_eq!(hits_b.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let bus = AuthEventBus::new();
    let (sub, hits) = counter(&bus);
    assert_eq!(bus.listener_count(), 1);

    drop(sub);
    assert_eq!(bus.listener_count(), 0);
    bus.publish(&AuthEvent::signed_out());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn clones_share_listeners() {
    let bus = AuthEventBus::new();
    let (_sub, hits) = counter(&bus);
    bus.clone().publish(&AuthEvent::signed_out());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_outliving_bus_drops_cleanly() {
    let bus = AuthEventBus::new();
    let (sub, _) = counter(&bus);
    drop(bus);
    drop(sub);
}

#[test]
fn listener_may_publish_reentrantly() {
    let bus = AuthEventBus::new();
    let (_sub, hits) = counter(&bus);
    let inner_bus = bus.clone();
    let _relay = bus.subscribe(move |event| {
        if event.kind == access::AuthEventKind::SignedIn {
            inner_bus.publish(&AuthEvent::token_refreshed(session()));
        }
    });

    bus.publish(&AuthEvent::signed_in(session()));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn scope_cancel_is_shared_across_clones() {
    let scope = ObserverScope::new();
    let task_copy = scope.clone();
    assert!(task_copy.is_alive());
    scope.cancel();
    assert!(!task_copy.is_alive());
}
