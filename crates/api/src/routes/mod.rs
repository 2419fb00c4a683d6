pub mod health;
pub mod marks;
pub mod upload;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET  /subjects         -> list_subjects
/// POST /marks/evaluate   -> evaluate_marks
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/subjects", get(handlers::marks::list_subjects))
        .route("/marks/evaluate", post(handlers::marks::evaluate_marks))
}
