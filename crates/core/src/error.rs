use crate::subject::{Component, SubjectCode};

/// A submitted mark fell outside `[0, max]` for its subject.
///
/// Only the first violation (in subject order, theory before practical) is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid {component} marks for subject {subject}. Max is {max}.")]
    OutOfRange {
        subject: SubjectCode,
        component: Component,
        max: u32,
    },
}

/// The photo upload form was submitted without a usable file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("No file part")]
    MissingFilePart,

    #[error("No selected file")]
    EmptyFilename,
}
