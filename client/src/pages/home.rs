//! Landing page: quick login, or straight on to the dashboard when signed in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use access::{AUTH_ROUTE, DASHBOARD_ROUTE};

use crate::pages::auth::LoginForm;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.with(|state| state.session().is_some()) {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        <div class="home-page">
            <div class="home-card">
                <h1>"Login"</h1>
                <LoginForm/>
                <p class="home-card__signup">
                    "Don't have an account? "
                    <a href=AUTH_ROUTE>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
