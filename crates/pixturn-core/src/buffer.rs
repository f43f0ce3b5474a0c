//! PixelBuffer - owned, byte-addressed pixel storage
//!
//! A `PixelBuffer` holds the raw pixel bytes of an image exactly as they
//! appear in the file: row-major, no row padding, `bits_per_pixel / 8` bytes
//! per pixel in channel order (channel0, channel1, ...).
//!
//! # Ownership model
//!
//! Every transform borrows a buffer immutably and returns a new, independently
//! owned buffer. Nothing in the pipeline aliases pixel storage between stages.
//!
//! # Size invariant
//!
//! The byte length is always `width * height * bits_per_pixel / 8`. The
//! constructors reject anything else, so downstream code can index without
//! re-validating.

use crate::error::{Error, Result};

/// Owned pixel bytes together with their geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bits_per_pixel: u32,
    data: Vec<u8>,
}

/// Compute the byte size of a `width` x `height` image at `bits_per_pixel`.
///
/// Validates the geometry first, so callers can size a read or an allocation
/// from untrusted header values.
///
/// # Errors
///
/// - [`Error::InvalidDimension`] if either dimension is zero
/// - [`Error::InvalidDepth`] if `bits_per_pixel` is not a positive multiple of 8
/// - [`Error::SizeOverflow`] if the product does not fit in `usize`
pub fn byte_size(width: u32, height: u32, bits_per_pixel: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if bits_per_pixel == 0 || bits_per_pixel % 8 != 0 {
        return Err(Error::InvalidDepth(bits_per_pixel));
    }
    let overflow = || Error::SizeOverflow {
        width,
        height,
        bits_per_pixel,
    };
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul((bits_per_pixel / 8) as usize))
        .ok_or_else(overflow)
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: u32, height: u32, bits_per_pixel: u32) -> Result<Self> {
        let size = byte_size(width, height, bits_per_pixel)?;
        Ok(Self {
            width,
            height,
            bits_per_pixel,
            data: vec![0u8; size],
        })
    }

    /// Wrap existing pixel bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data` is not exactly
    /// `width * height * bits_per_pixel / 8` bytes long, in addition to the
    /// geometry errors of [`byte_size`].
    pub fn from_bytes(width: u32, height: u32, bits_per_pixel: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_size(width, height, bits_per_pixel)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bits_per_pixel,
            data,
        })
    }

    /// Image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bits per pixel (a multiple of 8)
    #[inline]
    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Bytes per pixel, i.e. the number of 8-bit channels
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Bytes per row (no padding)
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    /// Total byte length
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Raw pixel bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Raw pixel bytes, mutable
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer, returning its bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of pixel (x, y).
    ///
    /// The caller must ensure the coordinate is inside the image.
    #[inline]
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * self.bytes_per_pixel()
    }

    /// The bytes of pixel (x, y), or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixel_unchecked(x, y))
    }

    /// The bytes of pixel (x, y).
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> &[u8] {
        let start = self.pixel_offset(x, y);
        &self.data[start..start + self.bytes_per_pixel()]
    }

    /// Mutable bytes of pixel (x, y), or `None` if out of bounds.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.pixel_offset(x, y);
        let bpp = self.bytes_per_pixel();
        Some(&mut self.data[start..start + bpp])
    }

    /// Overwrite pixel (x, y) with `value`.
    ///
    /// `value` must hold at least `bytes_per_pixel()` bytes; extra bytes are
    /// ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: &[u8]) -> Result<()> {
        let (width, height) = (self.width, self.height);
        let bpp = self.bytes_per_pixel();
        if value.len() < bpp {
            return Err(Error::BufferSizeMismatch {
                expected: bpp,
                actual: value.len(),
            });
        }
        let dst = self.pixel_mut(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width,
            height,
        })?;
        dst.copy_from_slice(&value[..bpp]);
        Ok(())
    }

    /// The bytes of row `y`, or `None` if out of bounds.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.row_bytes();
        let start = y as usize * stride;
        Some(&self.data[start..start + stride])
    }
}
