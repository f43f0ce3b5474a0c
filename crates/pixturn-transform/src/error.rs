//! Error types for pixturn-transform

use thiserror::Error;

/// Errors that can occur during geometric transformations
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixturn_core::Error),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
