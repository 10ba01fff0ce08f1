//! Well-known role name constants.
//!
//! These must match the seed data in `20250601000001_create_roles.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
