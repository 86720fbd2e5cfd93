//! Request status shared by the page loaders and the forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt::Display;

/// Where a form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Enter `Submitting`. Returns `false` if a submit is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Settle from a finished request: `Ok` carries the success text.
    pub fn finish<E: Display>(&mut self, result: Result<String, E>) {
        *self = match result {
            Ok(message) => Self::Success(message),
            Err(e) => Self::Error(e.to_string()),
        };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Error(message.into());
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Success(message) => Some(message),
            _ => None,
        }
    }
}

/// `loading -> ready | error` for a page's initial fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub loading: bool,
    pub error: Option<String>,
}

impl LoadState {
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle the load, keeping the error text; returns the value on success.
    pub fn settle<T, E: Display>(&mut self, result: Result<T, E>) -> Option<T> {
        self.loading = false;
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}
