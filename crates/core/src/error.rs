//! Domain error taxonomy shared across crates.

use crate::types::DbId;

/// Domain-level errors, independent of HTTP.
///
/// The API crate maps each variant onto a status code and JSON body;
/// repositories and domain helpers never deal in status codes directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule (self-follow, bad username, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state (duplicate username, ...).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to perform the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An unexpected internal failure. The message is logged, not surfaced.
    #[error("Internal error: {0}")]
    Internal(String),
}
