//! Photo upload rules.
//!
//! Uploaded photos are stored under their client-supplied name. No analysis is
//! performed yet; callers return [`ANALYSIS_PLACEHOLDER`] instead.

use crate::error::UploadError;

/// Multipart field that carries the photo.
pub const PHOTO_FIELD: &str = "photo";

/// Message returned in place of a photo analysis result.
pub const ANALYSIS_PLACEHOLDER: &str = "Photo analysis feature coming soon.";

/// Resolve the filename of the `photo` part.
///
/// `part` is `None` when the form had no `photo` file part at all (including a
/// `photo` field sent without a filename attribute), and `Some(name)` with the
/// raw client filename otherwise. The name is returned unmodified.
pub fn photo_filename(part: Option<&str>) -> Result<&str, UploadError> {
    match part {
        None => Err(UploadError::MissingFilePart),
        Some("") => Err(UploadError::EmptyFilename),
        Some(name) => Ok(name),
    }
}
