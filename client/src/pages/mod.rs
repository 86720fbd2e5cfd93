//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, submit flow, and
//! redirects) and delegates rendering details to `components`.

pub mod about;
pub mod add_bus;
pub mod add_trip;
pub mod bookings;
pub mod contact;
pub mod home;
pub mod login;
pub mod register;
pub mod search;
