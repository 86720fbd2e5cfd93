//! Account creation page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::{Registration, Role};
use crate::state::form::FormStatus;

fn parse_role(raw: &str) -> Role {
    if raw == Role::Admin.as_str() { Role::Admin } else { Role::User }
}

fn validate_registration_input(name: &str, email: &str, password: &str, role: Role) -> Result<Registration, &'static str> {
    let (name, email) = (name.trim(), email.trim());
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Name, email, and password are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let status = RwSignal::new(FormStatus::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_submitting() {
            return;
        }
        let registration = match validate_registration_input(&name.get(), &email.get(), &password.get(), role.get()) {
            Ok(r) => r,
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
            match crate::net::api::register(&crate::net::request::BrowserTransport, &registration).await {
                Ok(message) => {
                    log::info!("registered: {message}");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(e) => status.update(|s| s.fail(format!("Registration failed: {e}"))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = registration;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Your Account"</h1>
                <p class="auth-card__subtitle">"Register to get started"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="name">"Full Name"</label>
                    <input
                        id="name"
                        type="text"
                        autocomplete="name"
                        placeholder="Full Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label for="role">"Account Type"</label>
                    <select
                        id="role"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| role.set(parse_role(&event_target_value(&ev)))
                    >
                        <option value="user">"Traveller"</option>
                        <option value="admin">"Bus Operator"</option>
                    </select>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || status.get().is_submitting()>
                        {move || if status.get().is_submitting() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || status.get().error().is_some()>
                    <p class="form-error">{move || status.get().error().unwrap_or_default().to_owned()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
