//! pixturn core - Basic data structures for the bitmap pipeline
//!
//! This crate provides the data structures shared by every stage:
//!
//! - [`PixelBuffer`] - owned, row-major pixel bytes with their geometry
//! - [`Error`] / [`Result`] - the core error type
//!
//! Channel bytes are kept in file order. Nothing here interprets them as
//! colors; the filter stage treats the first three bytes of each pixel as
//! color channels and everything else as opaque.

pub mod buffer;
pub mod error;

pub use buffer::{PixelBuffer, byte_size};
pub use error::{Error, Result};
