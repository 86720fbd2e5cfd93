//! Role gate for the operator pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hides the add-trip and add-bus forms from non-admin accounts. This is a
//! navigation convenience only; the backend must still authorize every
//! operator request on its own.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a resolved session should be sent away from an operator page.
pub fn should_leave_operator_page(state: &AuthState) -> bool {
    state.checked && !state.is_operator()
}

/// Redirect to `/` once the profile has loaded and the account is not an
/// operator.
pub fn install_operator_gate<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_operator_page(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Load the profile with the login redirect enabled and publish it to
/// `auth`. Operator pages call this instead of trusting the navbar's probe.
#[cfg(feature = "hydrate")]
pub fn load_profile_strict(auth: RwSignal<AuthState>) {
    use crate::net::error::ApiError;
    use crate::net::request::BrowserTransport;

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_profile(&BrowserTransport).await {
            Ok(profile) => auth.set(AuthState::signed_in(profile)),
            // Navigation to /login is already under way.
            Err(ApiError::LoginRequired) => {}
            Err(e) => {
                log::warn!("profile load failed: {e}");
                auth.set(AuthState::anonymous());
            }
        }
    });
}
