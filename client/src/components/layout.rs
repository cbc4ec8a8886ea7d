//! Persistent app shell: header, optional sidebar, routed content, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router and never re-created on navigation. Owns
//! the session signal, installs the session observer and the client-side
//! route policy, and derives the visible chrome from the session and the
//! current path.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use access::LayoutChrome;

use crate::components::{footer::Footer, header::Header, sidebar::Sidebar};
use crate::net::auth_events::AuthEventBus;
use crate::state::session::SessionState;
use crate::util::auth::{install_route_policy, install_session_observer};

#[component]
pub fn LayoutShell(children: Children) -> impl IntoView {
    let bus = expect_context::<AuthEventBus>();
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    install_session_observer(session, &bus);

    let location = use_location();
    install_route_policy(session, location.pathname, use_navigate());

    let chrome = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|state| LayoutChrome::derive(state.session(), &path))
    });
    let identity = Signal::derive(move || chrome.get().identity);

    view! {
        <div class="app-shell">
            <Header identity/>
            <div class="app-shell__body">
                <Show when=move || chrome.get().sidebar>
                    <aside class="app-shell__sidebar">
                        <Sidebar/>
                    </aside>
                </Show>
                <main class="app-shell__main">{children()}</main>
            </div>
            <Show when=move || chrome.get().footer>
                <Footer/>
            </Show>
        </div>
    }
}
