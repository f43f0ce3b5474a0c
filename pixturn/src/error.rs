//! Error type for the end-to-end pipeline
//!
//! Wraps the error of every stage. Any of them aborts the run.

use pixturn_filter::FilterError;
use pixturn_io::IoError;
use pixturn_transform::TransformError;
use thiserror::Error;

/// Errors that can occur while running the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The configuration could not be read or is invalid
    #[error("config error: {0}")]
    Config(String),

    /// Loading or writing a bitmap failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// Rotation failed
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// Filtering failed
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
