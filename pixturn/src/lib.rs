//! pixturn - Quarter-turn rotation and Gaussian blur for uncompressed bitmaps
//!
//! Reads a bitmap with a fixed 54-byte header, writes its clockwise and
//! counter-clockwise rotations, and a Gaussian-blurred copy of the
//! clockwise rotation. The stages live in their own crates and are
//! re-exported here as modules:
//!
//! - [`io`] - header parsing, loading, writing
//! - [`transform`] - quarter-turn rotations
//! - [`filter`] - Gaussian kernel and interior convolution
//!
//! # Example
//!
//! ```
//! use pixturn::{PixelBuffer, transform::rotate_cw};
//!
//! let buf = PixelBuffer::new(4, 2, 24).unwrap();
//! let right = rotate_cw(&buf).unwrap();
//! assert_eq!((right.width(), right.height()), (2, 4));
//! ```

pub mod config;
mod error;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use pixturn_core::{Error, PixelBuffer, Result, byte_size};

// Re-export stage crates as modules to avoid name conflicts
pub use pixturn_filter as filter;
pub use pixturn_io as io;
pub use pixturn_transform as transform;

pub use config::Config;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{PipelineOutput, process, run};
