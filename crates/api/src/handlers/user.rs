//! Handlers for user profiles and the social graph.
//!
//! Follow/unfollow are idempotent: repeated calls converge on one edge or
//! none, and the response reports whether this call changed anything so
//! optimistic-UI clients can reconcile without errors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use loopedia_core::error::CoreError;
use loopedia_core::types::DbId;
use loopedia_core::username::validate_nickname;
use loopedia_db::models::follow::FollowListEntry;
use loopedia_db::models::user::{PublicProfile, UpdateProfile, User, UserResponse};
use loopedia_db::repositories::{FollowRepo, RoleRepo, SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::notifications;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /me/password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Outcome of a follow call. `created` is false when the edge already existed.
#[derive(Debug, Serialize)]
pub struct FollowOutcome {
    pub created: bool,
}

/// Outcome of an unfollow call. `deleted` is false when there was no edge.
#[derive(Debug, Serialize)]
pub struct UnfollowOutcome {
    pub deleted: bool,
}

/// A public profile annotated with the viewer's follow status.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: PublicProfile,
    pub is_following: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a user row or fail with 404.
async fn ensure_user_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound { entity: "User", id })
    })
}

/// Build the authenticated user's own account view.
async fn own_account_view(state: &AppState, user: User) -> AppResult<UserResponse> {
    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    Ok(UserResponse {
        id: user.id,
        username: user.username,
        nickname: user.nickname,
        email: user.email,
        role,
        avatar_url: user.avatar_url,
        is_verified: user.is_verified,
        created_at: user.created_at,
    })
}

// ---------------------------------------------------------------------------
// Own account
// ---------------------------------------------------------------------------

/// GET /api/me
///
/// The authenticated user's own account view.
pub async fn get_me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = ensure_user_exists(&state.pool, auth.user_id).await?;
    let data = own_account_view(&state, user).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/me
///
/// Update profile fields (nickname, avatar URL).
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    validate_nickname(input.nickname.as_deref())?;

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth.user_id,
            })
        })?;

    let data = own_account_view(&state, user).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/me/password
///
/// Change the password after verifying the current one. All sessions are
/// revoked so stolen refresh tokens die with the old password.
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    let user = ensure_user_exists(&state.pool, auth.user_id).await?;

    let current_valid = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    validate_password_strength(&input.new_password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    UserRepo::update_password(&state.pool, auth.user_id, &new_hash).await?;
    SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Public profiles
// ---------------------------------------------------------------------------

/// GET /api/users/{id}
///
/// A user's public profile with derived follower/following counts, plus
/// whether the viewer follows them. Viewing one's own profile or viewing
/// anonymously short-circuits `is_following` to false without a query.
pub async fn get_profile(
    OptionalAuthUser(viewer): OptionalAuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let profile = UserRepo::public_profile(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })
        })?;

    let is_following = match &viewer {
        Some(v) if v.user_id != user_id => {
            FollowRepo::exists(&state.pool, v.user_id, user_id).await?
        }
        _ => false,
    };

    Ok(Json(DataResponse {
        data: ProfileResponse {
            profile,
            is_following,
        },
    }))
}

// ---------------------------------------------------------------------------
// Follow / unfollow
// ---------------------------------------------------------------------------

/// POST /api/users/{id}/follow
///
/// Follow a user. Self-follow is rejected; following someone already
/// followed is a success reporting `created: false`. Only a first-time
/// creation notifies the followed user.
pub async fn follow(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<FollowOutcome>>> {
    if auth.user_id == user_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot follow yourself".into(),
        )));
    }
    ensure_user_exists(&state.pool, user_id).await?;

    let created = FollowRepo::create(&state.pool, auth.user_id, user_id).await?;
    if created {
        notifications::notify_follow(&state.pool, auth.user_id, user_id).await;
    }

    Ok(Json(DataResponse {
        data: FollowOutcome { created },
    }))
}

/// DELETE /api/users/{id}/follow
///
/// Unfollow a user. Removing a nonexistent edge is a success reporting
/// `deleted: false`.
pub async fn unfollow(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<UnfollowOutcome>>> {
    ensure_user_exists(&state.pool, user_id).await?;

    let deleted = FollowRepo::delete(&state.pool, auth.user_id, user_id).await?;

    Ok(Json(DataResponse {
        data: UnfollowOutcome { deleted },
    }))
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /api/users/{id}/followers
///
/// Users following `{id}`, newest first, annotated with whether the viewer
/// follows each of them.
pub async fn list_followers(
    OptionalAuthUser(viewer): OptionalAuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FollowListEntry>>>> {
    ensure_user_exists(&state.pool, user_id).await?;

    let viewer_id = viewer.map(|v| v.user_id);
    let data = FollowRepo::list_followers(&state.pool, user_id, viewer_id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/users/{id}/following
///
/// Users `{id}` follows, newest first, with the same viewer annotation.
pub async fn list_following(
    OptionalAuthUser(viewer): OptionalAuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FollowListEntry>>>> {
    ensure_user_exists(&state.pool, user_id).await?;

    let viewer_id = viewer.map(|v| v.user_id);
    let data = FollowRepo::list_following(&state.pool, user_id, viewer_id).await?;
    Ok(Json(DataResponse { data }))
}
