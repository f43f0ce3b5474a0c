//! Error types for pixturn-core
//!
//! Provides a unified error type for buffer construction and pixel access.
//! Each variant captures enough context for diagnostics without exposing
//! internal layout details.

use thiserror::Error;

/// pixturn core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Bits per pixel is not a positive multiple of 8
    #[error("invalid pixel depth: {0} bpp")]
    InvalidDepth(u32),

    /// Byte count does not match `width * height * bpp / 8`
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Buffer size does not fit in `usize`
    #[error("buffer size overflows for {width}x{height} at {bits_per_pixel} bpp")]
    SizeOverflow {
        width: u32,
        height: u32,
        bits_per_pixel: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
