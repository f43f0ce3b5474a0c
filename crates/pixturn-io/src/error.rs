//! I/O error types
//!
//! Provides a unified error type for loading and writing bitmap files.
//! Every failure is fatal to the caller: nothing here retries, and short
//! reads are reported rather than zero-filled.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for bitmap I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// The input file does not exist
    #[error("unable to open file: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The stream ended before a section was complete
    #[error("truncated input: {section} needs {expected} bytes, got {actual}")]
    Truncated {
        /// Which part of the file was being read ("header", "metadata gap", "pixel data")
        section: &'static str,
        /// Bytes required
        expected: usize,
        /// Bytes actually available
        actual: usize,
    },

    /// The header is structurally invalid
    #[error("invalid header: {0}")]
    Format(String),

    /// Standard I/O error (permission denied, disk full, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the core library (e.g. buffer geometry)
    #[error("core error: {0}")]
    Core(#[from] pixturn_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
