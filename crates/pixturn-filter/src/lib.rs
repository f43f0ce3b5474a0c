//! pixturn-filter - Gaussian filtering of pixel buffers
//!
//! This crate provides:
//!
//! - [`Kernel`] - a normalized square Gaussian kernel sized from sigma
//! - Interior convolution over the first three channels of each pixel
//! - [`gaussian_blur`] / [`gaussian_blur_in_place`] combining the two
//!
//! Only pixels at least `half_size` away from every edge are computed. The
//! border band is left at zero in the output, as are any channels beyond
//! the third.
//!
//! With the `parallel` feature, interior rows are filtered on the rayon
//! thread pool. Each row is written by exactly one worker and the output is
//! identical to the serial path.

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::{convolve_interior, gaussian_blur, gaussian_blur_in_place};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
