//! Shared domain vocabulary for the Loopedia backend.
//!
//! Everything here is pure: no I/O, no async. The `db` and `api` crates
//! build on these types.

pub mod error;
pub mod notification;
pub mod preset;
pub mod roles;
pub mod types;
pub mod username;
