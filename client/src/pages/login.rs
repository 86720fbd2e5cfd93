//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::state::form::FormStatus;

/// Trim inputs and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required.");
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_submitting() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                status.update(|s| s.fail(msg));
                return;
            }
        };
        status.update(|s| {
            s.begin();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&crate::net::request::BrowserTransport, &credentials).await {
                Ok(message) => {
                    log::info!("signed in: {message}");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => status.update(|s| s.fail(format!("Login failed: {e}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to book your next trip"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || status.get().is_submitting()>
                        {move || if status.get().is_submitting() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || status.get().error().is_some()>
                    <p class="form-error">{move || status.get().error().unwrap_or_default().to_owned()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
