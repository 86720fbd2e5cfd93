//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and list items. They read shared state from
//! Leptos context or take it as props, and report user intent back through
//! callbacks so pages keep ownership of network calls.

pub mod booking_card;
pub mod footer;
pub mod form_field;
pub mod navbar;
pub mod seat_modal;
pub mod trip_card;
