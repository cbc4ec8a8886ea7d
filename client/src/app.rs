//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::LayoutShell;
use crate::net::auth_events::AuthEventBus;
use crate::pages::{about::AboutPage, auth::AuthPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth event bus for the whole app. Session state itself is
/// owned by [`LayoutShell`], which lives as long as the layout is mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bus = AuthEventBus::new();
    #[cfg(feature = "hydrate")]
    crate::util::auth::install_cross_tab_listener(bus.clone());
    provide_context(bus);

    view! {
        <Stylesheet id="leptos" href="/pkg/bk-english.css"/>
        <Title text="BK English App"/>

        <Router>
            <LayoutShell>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </LayoutShell>
        </Router>
    }
}
