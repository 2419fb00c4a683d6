//! Handlers for the photo upload form.

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::response::Html;
use sgpa_core::error::UploadError;
use sgpa_core::upload::{photo_filename, ANALYSIS_PLACEHOLDER, PHOTO_FIELD};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views;

/// GET /upload
pub async fn show_form() -> Html<String> {
    Html(views::upload_form())
}

/// POST /upload
///
/// Accept a multipart form with a `photo` file part and store its bytes in the
/// upload directory under the client-supplied filename. Other parts are
/// ignored. An existing file with the same name is overwritten. A body that
/// is not multipart at all has no `photo` part either.
pub async fn upload_photo(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Html<String>> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Upload body is not multipart");
        UploadError::MissingFilePart
    })?;
    let mut filename: Option<String> = None;
    let mut data = Bytes::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        // A part without a filename attribute is a plain form value, not a file.
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        filename = Some(name);
        break;
    }

    let filename = photo_filename(filename.as_deref())?;

    let dest = state.config.upload_dir.join(filename);
    tokio::fs::write(&dest, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to save upload: {e}")))?;

    tracing::info!(
        path = %dest.display(),
        bytes = data.len(),
        "Photo uploaded"
    );

    Ok(Html(views::upload_result(ANALYSIS_PLACEHOLDER)))
}
