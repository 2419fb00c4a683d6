//! Handlers for the marks calculator form and its JSON counterpart.

use std::collections::HashMap;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use sgpa_core::grading::MarkResult;
use sgpa_core::marks::SubmittedMarks;
use sgpa_core::subject::SubjectCode;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views;

// ── HTML form ────────────────────────────────────────────────────────

/// GET /
///
/// Render the empty marks form.
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(views::marks_form(&state.grading, None))
}

/// POST /
///
/// Validate the submitted marks. On success render the result page; on the
/// first out-of-range mark re-render the form with the error message. A body
/// that is not urlencoded is treated as a form with every field omitted.
pub async fn submit_form(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Marks form body not urlencoded");
            HashMap::new()
        }
    };
    let marks = SubmittedMarks::from_form(&form);

    match state.grading.evaluate(&marks) {
        Ok(result) => {
            tracing::debug!(
                percentage = result.percentage,
                sgpa = result.sgpa,
                "Marks evaluated"
            );
            Html(views::marks_result(&result))
        }
        Err(err) => {
            tracing::debug!(error = %err, "Marks rejected");
            Html(views::marks_form(&state.grading, Some(&err.to_string())))
        }
    }
}

// ── JSON API ─────────────────────────────────────────────────────────

/// One row of the grading table.
#[derive(Debug, Serialize)]
pub struct SubjectInfo {
    pub code: SubjectCode,
    pub max_theory: u32,
    pub max_practical: u32,
}

/// GET /api/v1/subjects
///
/// List every subject with its maximum marks, in validation order.
pub async fn list_subjects(State(state): State<AppState>) -> Json<DataResponse<Vec<SubjectInfo>>> {
    let data = state
        .grading
        .subjects()
        .map(|(code, max)| SubjectInfo {
            code,
            max_theory: max.theory,
            max_practical: max.practical,
        })
        .collect();
    Json(DataResponse { data })
}

/// Request body for [`evaluate_marks`]. Omitted subjects count as zero.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub marks: SubmittedMarks,
}

/// POST /api/v1/marks/evaluate
///
/// Validate and score marks supplied as JSON.
pub async fn evaluate_marks(
    State(state): State<AppState>,
    Json(input): Json<EvaluateRequest>,
) -> AppResult<Json<DataResponse<MarkResult>>> {
    let result = state.grading.evaluate(&input.marks)?;
    Ok(Json(DataResponse { data: result }))
}
