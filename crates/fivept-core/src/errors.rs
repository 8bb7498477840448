//! Error types for the 5PT engine

use thiserror::Error;

/// Simulation input and catalog errors
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    #[error("Pool catalog is invalid: {reason}")]
    InvalidCatalog { reason: String },
}

/// Result type alias for 5PT engine operations
pub type Result<T> = std::result::Result<T, SimulationError>;

impl SimulationError {
    /// Get a dashboard-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::InvalidCatalog { .. } => "invalid_catalog",
        }
    }

    /// Shorthand for the common rejected-parameter case
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}
