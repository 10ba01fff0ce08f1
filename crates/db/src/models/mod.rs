//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Enriched read models where listings join other tables

pub mod comment;
pub mod contact;
pub mod follow;
pub mod notification;
pub mod preset;
pub mod session;
pub mod user;
