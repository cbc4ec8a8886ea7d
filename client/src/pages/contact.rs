//! Public contact page.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Contact"</h1>
            <p>"Questions about your account or the course material? We are happy to help."</p>
            <p>
                "Email: "
                <a href="mailto:support@bkenglish.app">"support@bkenglish.app"</a>
            </p>
        </div>
    }
}
