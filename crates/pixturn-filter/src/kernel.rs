//! Gaussian convolution kernel
//!
//! The kernel is derived entirely from sigma:
//!
//! - nominal side `size = ceil(6 * sigma) + 1`
//! - `half = size / 2` (integer division)
//! - weights cover offsets `-half..=half` on both axes, so the grid side is
//!   `2 * half + 1`; this equals `size` whenever `size` is odd and is one
//!   larger when it is even
//! - weight at offset (x, y) is `exp(-(x² + y²) / (2 sigma²))`, divided by
//!   the sum of all weights
//!
//! The center weight is always `exp(0) = 1` before normalization. It is
//! written directly, so a sigma small enough for `2 sigma²` to underflow
//! to zero yields the identity kernel instead of `0 / 0`.
//!
//! Arithmetic is `f32` throughout, so results match single-precision
//! implementations of the same formula.

use crate::{FilterError, FilterResult};

/// Largest grid side accepted, bounding the weight grid to 64 MiB of `f32`
pub const MAX_KERNEL_EXTENT: u32 = 4097;

/// A square, normalized 2D Gaussian kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Sigma the kernel was built from
    sigma: f32,
    /// Nominal side length, `ceil(6 * sigma) + 1`
    size: u32,
    /// Distance from the center to the edge of the grid
    half: u32,
    /// Weights, row-major, `(2 * half + 1)^2` entries
    data: Vec<f32>,
}

impl Kernel {
    /// Nominal side length for `sigma`: `ceil(6 * sigma) + 1`.
    pub fn nominal_size(sigma: f32) -> u32 {
        ((6.0 * sigma).ceil() as u32).saturating_add(1)
    }

    /// Create a normalized Gaussian kernel.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidParameters`] if `sigma` is not finite and positive
    /// - [`FilterError::InvalidKernel`] if the grid would exceed
    ///   [`MAX_KERNEL_EXTENT`]
    pub fn gaussian(sigma: f32) -> FilterResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be finite and positive, got {}",
                sigma
            )));
        }

        let size = Self::nominal_size(sigma);
        let half = size / 2;
        let extent = 2 * half as u64 + 1;
        if extent > MAX_KERNEL_EXTENT as u64 {
            return Err(FilterError::InvalidKernel(format!(
                "sigma {} needs a {}x{} kernel, limit is {}",
                sigma, extent, extent, MAX_KERNEL_EXTENT
            )));
        }

        let h = half as i32;
        let denom = 2.0 * sigma * sigma;
        let mut data = Vec::with_capacity((extent * extent) as usize);
        let mut sum = 0.0f32;
        for y in -h..=h {
            for x in -h..=h {
                let value = if x == 0 && y == 0 {
                    1.0
                } else {
                    (-((x * x + y * y) as f32) / denom).exp()
                };
                data.push(value);
                sum += value;
            }
        }
        for w in &mut data {
            *w /= sum;
        }

        Ok(Self {
            sigma,
            size,
            half,
            data,
        })
    }

    /// Sigma the kernel was built from
    #[inline]
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Nominal side length, `ceil(6 * sigma) + 1`
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Half-width, `size / 2`; also the width of the unfiltered border
    #[inline]
    pub fn half_size(&self) -> u32 {
        self.half
    }

    /// Side length of the weight grid, `2 * half_size + 1`
    #[inline]
    pub fn extent(&self) -> u32 {
        2 * self.half + 1
    }

    /// Weights in row-major order
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Weight at offset (`dx`, `dy`) from the center.
    pub fn get(&self, dx: i32, dy: i32) -> Option<f32> {
        let h = self.half as i32;
        if dx < -h || dx > h || dy < -h || dy > h {
            return None;
        }
        let extent = self.extent() as usize;
        let idx = (dy + h) as usize * extent + (dx + h) as usize;
        Some(self.data[idx])
    }

    /// Sum of all weights (1.0 up to rounding)
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}
