//! Handlers for the `/notifications` resource.
//!
//! All endpoints operate on the authenticated user; the recipient is never
//! client-supplied.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use loopedia_core::error::CoreError;
use loopedia_core::types::DbId;
use loopedia_db::models::notification::NotificationWithActor;
use loopedia_db::repositories::NotificationRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
}

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 50;

/// Response payload for `GET /notifications/unread-count`.
#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub count: i64,
}

/// Response payload for `POST /notifications/read-all`.
#[derive(Debug, Serialize)]
pub struct MarkedRead {
    pub marked_read: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/notifications
///
/// List the authenticated user's notifications newest-first, enriched with
/// actor display info.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<DataResponse<Vec<NotificationWithActor>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let data = NotificationRepo::list_for_recipient(&state.pool, auth.user_id, limit).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/notifications/unread-count
///
/// The number of unread notifications, derived by scan.
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UnreadCount>>> {
    let count = NotificationRepo::unread_count(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: UnreadCount { count },
    }))
}

/// POST /api/notifications/{id}/read
///
/// Mark a single notification as read. 404 for a missing notification,
/// 403 when it belongs to another user (its read state is untouched).
/// Marking an already-read notification is a no-op success.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let notification = NotificationRepo::find_by_id(&state.pool, notification_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Notification",
                id: notification_id,
            })
        })?;

    if notification.recipient_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Notification belongs to another user".into(),
        )));
    }

    NotificationRepo::mark_read(&state.pool, notification_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/notifications/read-all
///
/// Mark all of the authenticated user's notifications as read. Idempotent;
/// returns the number transitioned by this call.
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<MarkedRead>>> {
    let marked_read = NotificationRepo::mark_all_read(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: MarkedRead { marked_read },
    }))
}
