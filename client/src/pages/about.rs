//! Public about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"About BK English"</h1>
            <p>
                "BK English helps learners build reading, listening, writing and speaking "
                "skills with short daily practice sessions."
            </p>
            <p>"Sign in to track your progress across every skill."</p>
        </div>
    }
}
