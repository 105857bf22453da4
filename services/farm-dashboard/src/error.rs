//! Error types for the farm dashboard

use crate::validate::ValidationError;

/// Errors that can occur while synchronizing or mutating dashboard state
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Server responded with status {status}")]
    Server { status: u16 },

    #[error("JSON parse error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DashboardError {
    /// Short classification shown to the operator, e.g. "could not add checker (server error)"
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardError::Config(_) => "configuration error",
            DashboardError::Http(_) => "connection error",
            DashboardError::Server { .. } => "server error",
            DashboardError::InvalidJson(_) => "invalid json",
            DashboardError::Io(_) => "io error",
            DashboardError::Validation(_) => "validation error",
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
