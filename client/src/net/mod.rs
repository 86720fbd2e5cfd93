//! Networking modules for the ticketing backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `request` owns the transport seam and the session refresh-and-retry
//! wrapper, `api` maps each backend endpoint onto typed calls, `error`
//! turns failure bodies into display strings, and `types` defines the wire
//! schema.

pub mod api;
pub mod error;
pub mod request;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
