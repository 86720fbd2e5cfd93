//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting and browser concerns out of page and
//! component logic so they can be tested without a DOM.

pub mod auth;
pub mod query;
pub mod time;
