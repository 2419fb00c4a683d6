use std::sync::Arc;

use sgpa_core::grading::GradingConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is read-only and behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (upload directory, limits).
    pub config: Arc<ServerConfig>,
    /// Maximum marks per subject, fixed for the lifetime of the process.
    pub grading: Arc<GradingConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, grading: GradingConfig) -> Self {
        Self {
            config: Arc::new(config),
            grading: Arc::new(grading),
        }
    }
}
