//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `loopedia_db` and
//! map errors via [`AppError`](crate::error::AppError). Side-effect
//! notifications go through [`crate::notifications`].

pub mod auth;
pub mod contact;
pub mod notification;
pub mod preset;
pub mod user;
