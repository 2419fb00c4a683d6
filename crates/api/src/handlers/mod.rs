//! Request handlers.
//!
//! Handlers parse the request, delegate to `sgpa_core`, and render either an
//! HTML page or a JSON envelope. Errors map to HTTP via [`crate::error::AppError`].

pub mod marks;
pub mod upload;
