//! Session observer and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout shell installs exactly one observer for as long as it is
//! mounted. The observer fetches an initial snapshot, applies every event
//! from the [`AuthEventBus`], refreshes tokens shortly before they expire
//! and stops touching state the moment the layout unmounts.
//!
//! CROSS-TAB
//! =========
//! Tabs share cookies but not memory. Sign-in and sign-out write a marker
//! to `localStorage`; other tabs see the `storage` event and republish it on
//! their own bus.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use access::{AuthEvent, AuthEventKind, ROOT_ROUTE, Session};

use crate::net::auth_events::{AuthEventBus, AuthSubscription, ObserverScope};
use crate::state::session::SessionState;

/// `localStorage` key carrying cross-tab auth markers.
pub const STORAGE_EVENT_KEY: &str = "bk-english:auth-event";

/// Seconds between token-expiry checks.
#[cfg(feature = "hydrate")]
const REFRESH_CHECK_SECS: u64 = 30;

/// A bus subscription bounded by an [`ObserverScope`].
///
/// Dropping the observer cancels the scope and unsubscribes, so neither
/// pending async work nor later events reach the sink.
pub struct SessionObserver {
    scope: ObserverScope,
    _subscription: AuthSubscription,
}

impl SessionObserver {
    pub fn attach<F>(bus: &AuthEventBus, apply: F) -> Self
    where
        F: Fn(&AuthEvent) + Send + Sync + 'static,
    {
        let scope = ObserverScope::new();
        let live = scope.clone();
        let subscription = bus.subscribe(move |event| {
            if live.is_alive() {
                apply(event);
            }
        });
        Self { scope, _subscription: subscription }
    }

    /// Scope handle for async work started on this observer's behalf.
    pub fn scope(&self) -> ObserverScope {
        self.scope.clone()
    }
}

impl Drop for SessionObserver {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

/// Hand a fetched initial snapshot to `resolve` unless `scope` has ended.
///
/// Returns whether the snapshot was delivered.
pub fn apply_snapshot<F>(scope: &ObserverScope, snapshot: Option<Session>, resolve: F) -> bool
where
    F: FnOnce(Option<Session>),
{
    if !scope.is_alive() {
        return false;
    }
    resolve(snapshot);
    true
}

/// Install the session observer for the current reactive owner.
///
/// Must be called from a component; the observer is torn down in that
/// component's `on_cleanup`.
pub fn install_session_observer(session: RwSignal<SessionState>, bus: &AuthEventBus) {
    let observer = SessionObserver::attach(bus, move |event| {
        session.maybe_update(|state| state.apply_event(event));
    });

    #[cfg(feature = "hydrate")]
    {
        let scope = observer.scope();
        leptos::task::spawn_local(async move {
            let snapshot = match crate::net::api::fetch_session().await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    log::warn!("initial session lookup failed: {e}");
                    None
                }
            };
            apply_snapshot(&scope, snapshot, |snapshot| {
                session.maybe_update(|state| state.resolve_initial(snapshot));
            });
        });
        spawn_refresh_loop(session, bus.clone(), observer.scope());
    }

    on_cleanup(move || drop(observer));
}

/// Where the shared navigation policy sends `path` in `state`, if anywhere.
///
/// Nothing happens while the initial snapshot is still loading.
pub fn client_redirect(state: &SessionState, path: &str) -> Option<&'static str> {
    state.status().and_then(|status| access::decide(path, status).location())
}

/// Re-apply the navigation policy whenever the session or the path changes.
///
/// The edge guard covers full page loads; this covers in-app transitions
/// such as a sign-in completing or a session expiring while a page is open.
pub fn install_route_policy<F>(session: RwSignal<SessionState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if let Some(target) = session.with(|state| client_redirect(state, &path)) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Sign out, then leave for `/`.
///
/// Navigation happens whether or not the provider call succeeded. The
/// browser glue passes a full-page navigation, so this tab's state is
/// rebuilt from scratch and needs no event of its own.
pub async fn sign_out_and_leave<S, N>(sign_out: S, navigate: N)
where
    S: Future<Output = Result<(), String>>,
    N: FnOnce(&str),
{
    if let Err(e) = sign_out.await {
        #[cfg(feature = "hydrate")]
        log::warn!("sign-out failed; leaving anyway: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
    }
    navigate(ROOT_ROUTE);
}

fn kind_tag(kind: AuthEventKind) -> &'static str {
    match kind {
        AuthEventKind::SignedIn => "signed_in",
        AuthEventKind::SignedOut => "signed_out",
        AuthEventKind::TokenRefreshed => "token_refreshed",
        AuthEventKind::UserUpdated => "user_updated",
        AuthEventKind::SessionExpired => "session_expired",
    }
}

/// Marker value written to [`STORAGE_EVENT_KEY`].
///
/// The timestamp makes consecutive identical markers distinct so the
/// browser still fires a `storage` event for them.
pub fn storage_marker(kind: AuthEventKind, now_ms: u64) -> String {
    format!("{}:{now_ms}", kind_tag(kind))
}

pub fn parse_storage_marker(value: &str) -> Option<AuthEventKind> {
    let (tag, _) = value.split_once(':')?;
    [
        AuthEventKind::SignedIn,
        AuthEventKind::SignedOut,
        AuthEventKind::TokenRefreshed,
        AuthEventKind::UserUpdated,
        AuthEventKind::SessionExpired,
    ]
    .into_iter()
    .find(|kind| kind_tag(*kind) == tag)
}

// =============================================================================
// BROWSER GLUE
// =============================================================================

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(feature = "hydrate")]
fn now_secs() -> i64 {
    i64::try_from(now_millis() / 1000).unwrap_or(i64::MAX)
}

/// Tell other tabs that this tab's auth state changed.
#[cfg(feature = "hydrate")]
pub fn broadcast_auth_change(kind: AuthEventKind) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if let Err(e) = storage.set_item(STORAGE_EVENT_KEY, &storage_marker(kind, now_millis())) {
        log::warn!("failed to broadcast auth change: {e:?}");
    }
}

/// Full-page navigation, so the edge guard sees the new cookie state.
#[cfg(feature = "hydrate")]
pub fn hard_navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// Logout action for the header button.
#[cfg(feature = "hydrate")]
pub fn logout() {
    leptos::task::spawn_local(async {
        sign_out_and_leave(crate::net::api::sign_out(), |path| {
            broadcast_auth_change(AuthEventKind::SignedOut);
            hard_navigate(path);
        })
        .await;
    });
}

/// Republish auth markers written by other tabs onto this tab's bus.
#[cfg(feature = "hydrate")]
pub fn install_cross_tab_listener(bus: AuthEventBus) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        if ev.key().as_deref() != Some(STORAGE_EVENT_KEY) {
            return;
        }
        let Some(kind) = ev.new_value().as_deref().and_then(parse_storage_marker) else {
            return;
        };
        let bus = bus.clone();
        leptos::task::spawn_local(async move {
            if kind.ends_session() {
                bus.publish(&AuthEvent { kind, session: None });
                return;
            }
            match crate::net::api::fetch_session().await {
                Ok(Some(session)) => bus.publish(&AuthEvent { kind, session: Some(session) }),
                Ok(None) => bus.publish(&AuthEvent::signed_out()),
                Err(e) => log::warn!("cross-tab session lookup failed: {e}"),
            }
        });
    });
    if window
        .add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        handler.forget();
    }
}

#[cfg(feature = "hydrate")]
fn spawn_refresh_loop(session: RwSignal<SessionState>, bus: AuthEventBus, scope: ObserverScope) {
    use crate::state::session::needs_refresh;

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_CHECK_SECS)).await;
            if !scope.is_alive() {
                break;
            }
            let due = session.with_untracked(|state| state.session().is_some_and(|s| needs_refresh(s, now_secs())));
            if !due {
                continue;
            }
            match crate::net::api::refresh_session().await {
                Ok(Some(refreshed)) => bus.publish(&AuthEvent::token_refreshed(refreshed)),
                Ok(None) => bus.publish(&AuthEvent::session_expired()),
                Err(e) => log::warn!("token refresh failed: {e}"),
            }
        }
    });
}
