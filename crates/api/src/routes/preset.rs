//! Route definitions for presets and their engagement.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::preset;
use crate::state::AppState;

/// Routes for `/presets` and `/comments`.
///
/// ```text
/// GET    /presets                  -> list_presets
/// POST   /presets                  -> create_preset
/// GET    /presets/{id}             -> get_preset
/// PUT    /presets/{id}             -> update_preset
/// DELETE /presets/{id}             -> delete_preset
/// POST   /presets/{id}/like        -> like_preset       (idempotent)
/// DELETE /presets/{id}/like        -> unlike_preset     (idempotent)
/// POST   /presets/{id}/bookmark    -> bookmark_preset   (idempotent)
/// DELETE /presets/{id}/bookmark    -> unbookmark_preset (idempotent)
/// GET    /presets/{id}/comments    -> list_comments
/// POST   /presets/{id}/comments    -> create_comment
/// DELETE /comments/{id}            -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/presets",
            get(preset::list_presets).post(preset::create_preset),
        )
        .route(
            "/presets/{id}",
            get(preset::get_preset)
                .put(preset::update_preset)
                .delete(preset::delete_preset),
        )
        .route(
            "/presets/{id}/like",
            post(preset::like_preset).delete(preset::unlike_preset),
        )
        .route(
            "/presets/{id}/bookmark",
            post(preset::bookmark_preset).delete(preset::unbookmark_preset),
        )
        .route(
            "/presets/{id}/comments",
            get(preset::list_comments).post(preset::create_comment),
        )
        .route("/comments/{id}", delete(preset::delete_comment))
}
