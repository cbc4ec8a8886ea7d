//! Auth page: login and sign-up tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in publishes `SignedIn` on the auth event bus. The
//! layout observer picks it up and the route policy moves the user on to the
//! dashboard; this page never navigates by itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

/// Minimum password length accepted by the identity provider.
pub(crate) const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    SignUp,
}

/// Trimmed email + password for a login attempt.
pub(crate) fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trimmed email + password for a sign-up attempt.
pub(crate) fn validate_sign_up(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let (email, password) = validate_login(email, password)?;
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((email, password))
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let tab = RwSignal::new(AuthTab::default());
    let tab_class = move |which: AuthTab| {
        if tab.get() == which { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-tabs">
                    <button class=move || tab_class(AuthTab::Login) on:click=move |_| tab.set(AuthTab::Login)>
                        "Login"
                    </button>
                    <button class=move || tab_class(AuthTab::SignUp) on:click=move |_| tab.set(AuthTab::SignUp)>
                        "Sign Up"
                    </button>
                </div>
                <Show when=move || tab.get() == AuthTab::Login fallback=|| view! { <SignUpForm/> }>
                    <LoginForm/>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub(crate) fn LoginForm() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let bus = expect_context::<crate::net::auth_events::AuthEventBus>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let bus = bus.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(session) => {
                        info.set(String::new());
                        crate::util::auth::broadcast_auth_change(access::AuthEventKind::SignedIn);
                        bus.publish(&access::AuthEvent::signed_in(session));
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                "Login"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
        </form>
    }
}

#[component]
fn SignUpForm() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let bus = expect_context::<crate::net::auth_events::AuthEventBus>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_up(&email.get(), &password.get(), &confirm.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let bus = bus.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&email_value, &password_value).await {
                    Ok(crate::net::api::SignUpOutcome { session: Some(session), .. }) => {
                        info.set(String::new());
                        crate::util::auth::broadcast_auth_change(access::AuthEventKind::SignedIn);
                        bus.publish(&access::AuthEvent::signed_in(session));
                    }
                    Ok(_) => info.set("Check your email to confirm your account, then log in.".to_owned()),
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <input
                class="auth-input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Confirm password"
                prop:value=move || confirm.get()
                on:input=move |ev| confirm.set(event_target_value(&ev))
            />
            <button class="auth-button" type="submit" disabled=move || busy.get()>
                "Sign Up"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="auth-message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
