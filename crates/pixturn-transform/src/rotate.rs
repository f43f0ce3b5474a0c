//! Orthogonal rotations
//!
//! This module provides:
//! - Quarter-turn rotations, clockwise ("right") and counter-clockwise ("left")
//! - Half-turn rotation
//! - Composition by number of quarter turns
//!
//! # Coordinate mapping
//!
//! For a `width` x `height` source, a quarter turn produces a
//! `height` x `width` destination. Source pixel (x, y) lands at:
//!
//! - clockwise: `(y, width - x - 1)`
//! - counter-clockwise: `(height - y - 1, x)`
//!
//! Coordinates index the buffer in storage order (row 0 first), so the
//! mapping is independent of whether the file stores rows top-down or
//! bottom-up.

use crate::TransformResult;
use log::debug;
use pixturn_core::PixelBuffer;

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// 90 degrees clockwise ("right")
    Clockwise,
    /// 90 degrees counter-clockwise ("left")
    CounterClockwise,
}

impl Rotation {
    /// Rotate `buf` a quarter turn in this direction.
    pub fn apply(self, buf: &PixelBuffer) -> TransformResult<PixelBuffer> {
        rotate_90(buf, self == Rotation::Clockwise)
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

/// Rotate a buffer by 90-degree increments
///
/// # Arguments
/// * `buf` - Input buffer
/// * `quads` - Number of 90-degree clockwise rotations (taken modulo 4)
///
/// # Returns
/// The rotated buffer; for `quads % 4 == 0` an unchanged copy
pub fn rotate_orth(buf: &PixelBuffer, quads: u32) -> TransformResult<PixelBuffer> {
    match quads % 4 {
        0 => Ok(buf.clone()),
        1 => rotate_90(buf, true),
        2 => rotate_180(buf),
        3 => rotate_90(buf, false),
        _ => unreachable!(),
    }
}

/// Rotate a buffer 90 degrees
///
/// # Arguments
/// * `buf` - Input buffer
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(buf: &PixelBuffer, clockwise: bool) -> TransformResult<PixelBuffer> {
    let w = buf.width();
    let h = buf.height();

    // Output dimensions are swapped
    let mut out = PixelBuffer::new(h, w, buf.bits_per_pixel())?;
    rotate_90_impl(buf, &mut out, clockwise);

    debug!(
        "rotate_90: {}x{} -> {}x{} ({})",
        w,
        h,
        out.width(),
        out.height(),
        if clockwise { "clockwise" } else { "counter-clockwise" }
    );
    Ok(out)
}

/// Rotate a buffer 90 degrees clockwise
pub fn rotate_cw(buf: &PixelBuffer) -> TransformResult<PixelBuffer> {
    rotate_90(buf, true)
}

/// Rotate a buffer 90 degrees counter-clockwise
pub fn rotate_ccw(buf: &PixelBuffer) -> TransformResult<PixelBuffer> {
    rotate_90(buf, false)
}

/// Internal implementation of 90 degree rotation
fn rotate_90_impl(src: &PixelBuffer, dst: &mut PixelBuffer, clockwise: bool) {
    let w = src.width() as usize;
    let h = src.height() as usize;
    let bpp = src.bytes_per_pixel();
    // Destination rows are `h` pixels wide
    let dst_stride = h * bpp;
    let out = dst.data_mut();

    for (y, row) in src.data().chunks_exact(w * bpp).enumerate() {
        for (x, px) in row.chunks_exact(bpp).enumerate() {
            let (nx, ny) = if clockwise {
                (y, w - x - 1)
            } else {
                (h - y - 1, x)
            };
            let start = ny * dst_stride + nx * bpp;
            out[start..start + bpp].copy_from_slice(px);
        }
    }
}

/// Rotate a buffer 180 degrees
///
/// Equivalent to two clockwise quarter turns, done in a single pass: source
/// (x, y) lands at `(width - x - 1, height - y - 1)`.
pub fn rotate_180(buf: &PixelBuffer) -> TransformResult<PixelBuffer> {
    let bpp = buf.bytes_per_pixel();
    let mut out = PixelBuffer::new(buf.width(), buf.height(), buf.bits_per_pixel())?;

    // Reversing pixel order in a row-major buffer is exactly a half turn
    for (dst, src) in out
        .data_mut()
        .chunks_exact_mut(bpp)
        .zip(buf.data().chunks_exact(bpp).rev())
    {
        dst.copy_from_slice(src);
    }
    Ok(out)
}
