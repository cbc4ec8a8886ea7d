//! Learner navigation, shown only while signed in.

use leptos::prelude::*;

use access::{DASHBOARD_ROUTE, Session};

use crate::state::session::SessionState;

const NAV_LINKS: [(&str, &str); 7] = [
    ("Dashboard", DASHBOARD_ROUTE),
    ("Reading", "/reading"),
    ("Listening", "/listening"),
    ("Writing", "/writing"),
    ("Speaking", "/speaking"),
    ("Progress", "/progress"),
    ("Settings", "/settings"),
];

const INTRO_LINKS: [(&str, &str); 3] = [
    ("Overview", "/introduction/overview"),
    ("Features", "/introduction/features"),
    ("User Guide", "/introduction/guide"),
];

fn user_label(state: &SessionState) -> String {
    if state.is_loading() {
        return "Loading...".to_owned();
    }
    state.session().and_then(Session::email).unwrap_or("Guest").to_owned()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let show_intro = RwSignal::new(false);

    view! {
        <div class="sidebar">
            <div class="sidebar__profile">
                <p class="sidebar__user">{move || session.with(user_label)}</p>
            </div>
            <div class="sidebar__intro">
                <button class="sidebar__intro-toggle" on:click=move |_| show_intro.update(|open| *open = !*open)>
                    "Introduction"
                </button>
                <Show when=move || show_intro.get()>
                    <div class="sidebar__intro-links">
                        {INTRO_LINKS
                            .iter()
                            .map(|(label, href)| view! { <a href=*href class="sidebar__link">{*label}</a> })
                            .collect_view()}
                    </div>
                </Show>
            </div>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href class="sidebar__link">{*label}</a> })
                    .collect_view()}
            </nav>
        </div>
    }
}
