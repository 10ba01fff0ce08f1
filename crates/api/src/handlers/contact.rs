//! Handlers for the contact/support workflow.
//!
//! Users submit messages; admins list and reply. A reply notifies the
//! message author with a `contact_reply` notification carrying no actor.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use loopedia_core::error::CoreError;
use loopedia_core::types::DbId;
use loopedia_db::models::contact::{ContactMessage, CreateContactMessage};
use loopedia_db::repositories::ContactRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::notifications;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum length for a contact subject.
const MAX_SUBJECT_LEN: usize = 200;

/// Maximum length for a contact body or reply.
const MAX_BODY_LEN: usize = 10_000;

/// Maximum page size for the admin listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for the admin listing.
const DEFAULT_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/contact`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Request body for `POST /admin/contact/{id}/reply`.
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub body: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_text(value: &str, what: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{what} must not be empty"
        ))));
    }
    if value.len() > max_len {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{what} too long: {} chars (max {max_len})",
            value.len()
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/contact
///
/// Submit a contact/support message as the authenticated user.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactMessage>>)> {
    validate_text(&input.subject, "Subject", MAX_SUBJECT_LEN)?;
    validate_text(&input.body, "Message", MAX_BODY_LEN)?;

    let message = ContactRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// GET /api/admin/contact
///
/// List all contact messages newest-first. Admin only.
pub async fn admin_list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<ContactMessage>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let data = ContactRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/admin/contact/{id}/reply
///
/// Record an admin reply and notify the message author. Admin only.
pub async fn admin_reply(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(contact_id): Path<DbId>,
    Json(input): Json<ReplyRequest>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    validate_text(&input.body, "Reply", MAX_BODY_LEN)?;

    let message = ContactRepo::reply(&state.pool, contact_id, &input.body)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "ContactMessage",
                id: contact_id,
            })
        })?;

    // An admin replying to their own message gets no notification.
    if message.user_id != admin.user_id {
        notifications::notify_contact_reply(&state.pool, message.user_id, contact_id).await;
    }

    Ok(Json(DataResponse { data: message }))
}
