//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided by `App` as `RwSignal<AuthState>`. The navbar reads it to choose
//! between sign-in links and the avatar; operator pages read the role to gate
//! their forms.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, UserProfile};

/// The signed-in user, once the session probe has answered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub profile: Option<UserProfile>,
    /// `true` once a profile lookup has completed, successful or not.
    pub checked: bool,
}

impl AuthState {
    pub fn signed_in(profile: UserProfile) -> Self {
        Self { profile: Some(profile), checked: true }
    }

    pub fn anonymous() -> Self {
        Self { profile: None, checked: true }
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Only `admin` accounts may manage buses and trips.
    pub fn is_operator(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.role == Role::Admin)
    }
}
