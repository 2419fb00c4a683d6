//! Route definitions for the browser marks form, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::marks;
use crate::state::AppState;

/// ```text
/// GET  /  -> show_form
/// POST /  -> submit_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(marks::show_form).post(marks::submit_form))
}
