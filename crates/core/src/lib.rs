//! Domain logic for the marks calculator: subject codes, the grading table,
//! mark validation and scoring, and the photo upload rules.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod grading;
pub mod marks;
pub mod subject;
pub mod upload;
