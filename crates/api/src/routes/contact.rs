//! Route definitions for the contact/support workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes for `/contact` and `/admin/contact`.
///
/// ```text
/// POST /contact                   -> submit
/// GET  /admin/contact             -> admin_list  (admin)
/// POST /admin/contact/{id}/reply  -> admin_reply (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit))
        .route("/admin/contact", get(contact::admin_list))
        .route("/admin/contact/{id}/reply", post(contact::admin_reply))
}
