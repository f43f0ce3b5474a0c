//! pixturn-transform - Orthogonal rotations of pixel buffers
//!
//! Rotations are exact permutations of whole pixels: every pixel's bytes are
//! copied as a unit to their new position, with no interpolation. Output
//! buffers always have the source's byte size with width and height swapped
//! (or kept, for a half turn).

mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{Rotation, rotate_90, rotate_180, rotate_ccw, rotate_cw, rotate_orth};
