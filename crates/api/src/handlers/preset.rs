//! Handlers for presets and their engagement (likes, bookmarks, comments).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use loopedia_core::error::CoreError;
use loopedia_core::preset::{
    validate_comment_body, validate_description, validate_parameters, validate_title,
};
use loopedia_core::roles::ROLE_ADMIN;
use loopedia_core::types::DbId;
use loopedia_db::models::comment::{Comment, CommentWithAuthor, CreateComment};
use loopedia_db::models::preset::{CreatePreset, Preset, PresetWithStats, UpdatePreset};
use loopedia_db::repositories::{BookmarkRepo, CommentRepo, LikeRepo, PresetRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::notifications;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum page size for preset listings.
const MAX_LIMIT: i64 = 100;

/// Default page size for preset listings.
const DEFAULT_LIMIT: i64 = 20;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /presets`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Restrict to presets owned by this user.
    pub owner_id: Option<DbId>,
    /// Maximum number of results. Defaults to 20, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Query parameters for `GET /me/bookmarks`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Outcome of a like/bookmark call.
#[derive(Debug, Serialize)]
pub struct ToggleOutcome {
    pub created: bool,
}

/// Outcome of an unlike/unbookmark call.
#[derive(Debug, Serialize)]
pub struct RemoveOutcome {
    pub deleted: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a preset exists, returning the full row.
async fn ensure_preset_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Preset> {
    PresetRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Preset",
            id,
        })
    })
}

fn clamp_page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}

// ---------------------------------------------------------------------------
// Preset CRUD
// ---------------------------------------------------------------------------

/// POST /api/presets
///
/// Create a preset owned by the authenticated user.
pub async fn create_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePreset>,
) -> AppResult<(StatusCode, Json<DataResponse<Preset>>)> {
    validate_title(&input.title)?;
    validate_description(input.description.as_deref())?;
    validate_parameters(&input.parameters)?;

    let preset = PresetRepo::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: preset })))
}

/// GET /api/presets
///
/// List presets newest-first with owner info and engagement counts.
pub async fn list_presets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<PresetWithStats>>>> {
    let (limit, offset) = clamp_page(params.limit, params.offset);
    let data = PresetRepo::list(&state.pool, params.owner_id, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/presets/{id}
pub async fn get_preset(
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<PresetWithStats>>> {
    let preset = PresetRepo::find_with_stats(&state.pool, preset_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Preset",
                id: preset_id,
            })
        })?;
    Ok(Json(DataResponse { data: preset }))
}

/// PUT /api/presets/{id}
///
/// Update a preset. Only the owner may edit.
pub async fn update_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
    Json(input): Json<UpdatePreset>,
) -> AppResult<Json<DataResponse<Preset>>> {
    let existing = ensure_preset_exists(&state.pool, preset_id).await?;
    if existing.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner can edit a preset".into(),
        )));
    }

    if let Some(title) = input.title.as_deref() {
        validate_title(title)?;
    }
    validate_description(input.description.as_deref())?;
    if let Some(parameters) = &input.parameters {
        validate_parameters(parameters)?;
    }

    let preset = PresetRepo::update(&state.pool, preset_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Preset",
                id: preset_id,
            })
        })?;
    Ok(Json(DataResponse { data: preset }))
}

/// DELETE /api/presets/{id}
///
/// Delete a preset. Allowed for the owner or an admin.
pub async fn delete_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = ensure_preset_exists(&state.pool, preset_id).await?;
    if existing.owner_id != auth.user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the owner or an admin can delete a preset".into(),
        )));
    }

    PresetRepo::delete(&state.pool, preset_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

/// POST /api/presets/{id}/like
///
/// Like a preset. Idempotent; only a first-time like notifies the owner,
/// and liking one's own preset never does.
pub async fn like_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ToggleOutcome>>> {
    let preset = ensure_preset_exists(&state.pool, preset_id).await?;

    let created = LikeRepo::create(&state.pool, auth.user_id, preset_id).await?;
    if created {
        notifications::notify_like(&state.pool, auth.user_id, preset.owner_id, preset_id).await;
    }

    Ok(Json(DataResponse {
        data: ToggleOutcome { created },
    }))
}

/// DELETE /api/presets/{id}/like
///
/// Remove a like. Removing a nonexistent like is a no-op success.
pub async fn unlike_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<RemoveOutcome>>> {
    ensure_preset_exists(&state.pool, preset_id).await?;

    let deleted = LikeRepo::delete(&state.pool, auth.user_id, preset_id).await?;
    Ok(Json(DataResponse {
        data: RemoveOutcome { deleted },
    }))
}

// ---------------------------------------------------------------------------
// Bookmarks
// ---------------------------------------------------------------------------

/// POST /api/presets/{id}/bookmark
///
/// Bookmark a preset. Idempotent; bookmarks are private and never notify.
pub async fn bookmark_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ToggleOutcome>>> {
    ensure_preset_exists(&state.pool, preset_id).await?;

    let created = BookmarkRepo::create(&state.pool, auth.user_id, preset_id).await?;
    Ok(Json(DataResponse {
        data: ToggleOutcome { created },
    }))
}

/// DELETE /api/presets/{id}/bookmark
pub async fn unbookmark_preset(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<RemoveOutcome>>> {
    ensure_preset_exists(&state.pool, preset_id).await?;

    let deleted = BookmarkRepo::delete(&state.pool, auth.user_id, preset_id).await?;
    Ok(Json(DataResponse {
        data: RemoveOutcome { deleted },
    }))
}

/// GET /api/me/bookmarks
///
/// The authenticated user's bookmarked presets, newest bookmark first.
pub async fn list_bookmarks(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<Vec<PresetWithStats>>>> {
    let (limit, offset) = clamp_page(params.limit, params.offset);
    let data = PresetRepo::list_bookmarked(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// GET /api/presets/{id}/comments
///
/// A preset's comments oldest-first with author display info.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CommentWithAuthor>>>> {
    ensure_preset_exists(&state.pool, preset_id).await?;

    let data = CommentRepo::list_for_preset(&state.pool, preset_id).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/presets/{id}/comments
///
/// Comment on a preset. Notifies the owner unless they are the commenter.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(preset_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    let preset = ensure_preset_exists(&state.pool, preset_id).await?;
    validate_comment_body(&input.body)?;

    let comment = CommentRepo::create(&state.pool, preset_id, auth.user_id, &input.body).await?;
    notifications::notify_comment(
        &state.pool,
        auth.user_id,
        preset.owner_id,
        preset_id,
        comment.id,
    )
    .await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// DELETE /api/comments/{id}
///
/// Delete a comment. Allowed for the author or an admin.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let comment = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Comment",
                id: comment_id,
            })
        })?;

    if comment.user_id != auth.user_id && auth.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or an admin can delete a comment".into(),
        )));
    }

    CommentRepo::delete(&state.pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
