//! Learner dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route: the edge guard and the route policy keep anonymous users
//! out, so this page only renders for a signed-in learner (or while the
//! session is still loading after hydration).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use access::Session;

use crate::state::session::SessionState;

const SKILLS: [&str; 4] = ["Reading", "Listening", "Writing", "Speaking"];

fn greeting(state: &SessionState) -> String {
    match state.session().and_then(Session::email) {
        Some(email) => format!("Welcome back, {email}"),
        None if state.is_loading() => "Loading...".to_owned(),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="dashboard-page">
            <h1>"Your Learning Dashboard"</h1>
            <p class="dashboard-page__greeting">{move || session.with(greeting)}</p>
            <div class="dashboard-page__skills">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <section class="skill-card">
                                <h2>{*skill}</h2>
                                <p class="skill-card__empty">"No practice recorded yet."</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
