//! Route definitions for the photo upload form.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// ```text
/// GET  /upload  -> show_form
/// POST /upload  -> upload_photo
/// ```
///
/// Request bodies on this route may be up to `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/upload",
        get(upload::show_form)
            .post(upload::upload_photo)
            .layer(DefaultBodyLimit::max(max_upload_bytes)),
    )
}
