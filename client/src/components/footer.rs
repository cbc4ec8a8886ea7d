//! Site footer, hidden on the auth screen.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            <p class="site-footer__copyright">{format!("© {} BK English. All rights reserved.", current_year())}</p>
        </footer>
    }
}

#[cfg(feature = "hydrate")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(feature = "hydrate"))]
fn current_year() -> u32 {
    const SECS_PER_YEAR: u64 = 31_556_952;
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs());
    1970 + u32::try_from(secs / SECS_PER_YEAR).unwrap_or(0)
}
