//! Top bar: brand link, signed-in identity and logout.

use leptos::prelude::*;

use access::{HeaderIdentity, ROOT_ROUTE};

#[component]
pub fn Header(identity: Signal<Option<HeaderIdentity>>) -> impl IntoView {
    let busy = RwSignal::new(false);
    Effect::new(move || {
        if identity.get().is_none() {
            busy.set(false);
        }
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        crate::util::auth::logout();
    };

    view! {
        <header class="site-header">
            <a href=ROOT_ROUTE class="site-header__brand">"BK English"</a>
            <nav class="site-header__nav">
                {move || {
                    identity
                        .get()
                        .map(|identity| {
                            view! {
                                <span class="site-header__identity">{identity.label}</span>
                                <button
                                    class="site-header__logout"
                                    on:click=on_logout
                                    disabled=move || busy.get()
                                >
                                    "Logout"
                                </button>
                            }
                        })
                }}
            </nav>
        </header>
    }
}
