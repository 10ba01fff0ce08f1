//! Route definitions for own-account and user/social-graph resources.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{preset, user};
use crate::state::AppState;

/// Routes for `/me` and `/users/{id}`.
///
/// ```text
/// GET    /me                    -> get_me
/// PUT    /me                    -> update_me
/// PUT    /me/password           -> change_password
/// GET    /me/bookmarks          -> list_bookmarks
///
/// GET    /users/{id}            -> get_profile
/// POST   /users/{id}/follow     -> follow     (idempotent)
/// DELETE /users/{id}/follow     -> unfollow   (idempotent)
/// GET    /users/{id}/followers  -> list_followers
/// GET    /users/{id}/following  -> list_following
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(user::get_me).put(user::update_me))
        .route("/me/password", put(user::change_password))
        .route("/me/bookmarks", get(preset::list_bookmarks))
        .route("/users/{id}", get(user::get_profile))
        .route(
            "/users/{id}/follow",
            post(user::follow).delete(user::unfollow),
        )
        .route("/users/{id}/followers", get(user::list_followers))
        .route("/users/{id}/following", get(user::list_following))
}
