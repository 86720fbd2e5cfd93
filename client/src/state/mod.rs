//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page concern (`search`, `seats`, `bookings`, ...) so each
//! page can hold a small focused model in an `RwSignal` and keep the
//! transition rules testable without a browser.

pub mod auth;
pub mod bookings;
pub mod form;
pub mod search;
pub mod seats;
pub mod trip_form;
