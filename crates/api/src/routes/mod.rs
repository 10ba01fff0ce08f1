pub mod auth;
pub mod contact;
pub mod health;
pub mod notification;
pub mod preset;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
///
/// /me                                 own account get/update
/// /me/password                        password change
/// /me/bookmarks                       bookmarked presets
///
/// /users/{id}                         public profile
/// /users/{id}/follow                  follow/unfollow (POST/DELETE)
/// /users/{id}/followers               annotated follower listing
/// /users/{id}/following               annotated following listing
///
/// /presets                            list, create
/// /presets/{id}                       get, update, delete
/// /presets/{id}/like                  like/unlike (POST/DELETE)
/// /presets/{id}/bookmark              bookmark/unbookmark (POST/DELETE)
/// /presets/{id}/comments              list, create
/// /comments/{id}                      delete
///
/// /notifications                      listing
/// /notifications/unread-count         unread count
/// /notifications/{id}/read            mark one read
/// /notifications/read-all             mark all read
///
/// /contact                            submit message
/// /admin/contact                      list messages (admin)
/// /admin/contact/{id}/reply           reply (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(user::router())
        .merge(preset::router())
        .nest("/notifications", notification::router())
        .merge(contact::router())
}
