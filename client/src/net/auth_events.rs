//! In-app auth event bus.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in, sign-out, token refresh and cross-tab notifications all publish
//! here; the layout's session observer subscribes. Subscriptions are RAII
//! handles so an unmounted layout can never be called back.
//!
//! CONCURRENCY
//! ===========
//! Listeners are cloned out of the lock before being invoked, so a listener
//! may publish or unsubscribe re-entrantly without deadlocking.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use access::AuthEvent;

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    listeners: Vec<(u64, Listener)>,
}

/// Shared fan-out of [`AuthEvent`]s. Cheap to clone; clones share listeners.
#[derive(Clone, Default)]
pub struct AuthEventBus {
    inner: Arc<Mutex<BusInner>>,
    next_id: Arc<AtomicU64>,
}

fn lock(inner: &Mutex<BusInner>) -> MutexGuard<'_, BusInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AuthEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`. It stays registered until the returned handle drops.
    pub fn subscribe<F>(&self, listener: F) -> AuthSubscription
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner).listeners.push((id, Arc::new(listener)));
        AuthSubscription { bus: Arc::downgrade(&self.inner), id }
    }

    /// Deliver `event` to every current listener, in subscription order.
    pub fn publish(&self, event: &AuthEvent) {
        let listeners: Vec<Listener> = lock(&self.inner).listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Handle returned by [`AuthEventBus::subscribe`]; unsubscribes on drop.
pub struct AuthSubscription {
    bus: Weak<Mutex<BusInner>>,
    id: u64,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            lock(&inner).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Liveness flag shared between an observer and the async work it spawns.
///
/// Work that completes after [`ObserverScope::cancel`] must drop its result.
#[derive(Clone, Debug)]
pub struct ObserverScope {
    alive: Arc<AtomicBool>,
}

impl Default for ObserverScope {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl ObserverScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Release);
    }
}
