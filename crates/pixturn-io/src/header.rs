//! Bitmap header decoding
//!
//! The header is a fixed 54-byte block (14-byte file header followed by a
//! 40-byte info header). Only four fields are interpreted; every other byte
//! is carried through to the output untouched.
//!
//! | field          | offset | width | type  |
//! |----------------|--------|-------|-------|
//! | pixel offset   | 10     | 4     | `u32` |
//! | width          | 18     | 4     | `i32` |
//! | height         | 22     | 4     | `i32` |
//! | bits per pixel | 28     | 2     | `u16` |
//!
//! All integers are little-endian regardless of host byte order.

use crate::{IoError, IoResult};
use pixturn_core::byte_size;

/// Size of the fixed header block
pub const BMP_HEADER_SIZE: usize = 54;

const PIXEL_OFFSET_FIELD: usize = 10;
const WIDTH_FIELD: usize = 18;
const HEIGHT_FIELD: usize = 22;
const BITS_PER_PIXEL_FIELD: usize = 28;

/// Decode a little-endian `u16` at `offset`.
///
/// Panics if `bytes` is shorter than `offset + 2`.
#[inline]
pub fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Decode a little-endian `u32` at `offset`.
///
/// Panics if `bytes` is shorter than `offset + 4`.
#[inline]
pub fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Decode a little-endian `i32` at `offset`.
///
/// Panics if `bytes` is shorter than `offset + 4`.
#[inline]
pub fn read_i32_le(bytes: &[u8], offset: usize) -> i32 {
    read_u32_le(bytes, offset) as i32
}

#[inline]
fn write_i32_le(bytes: &mut [u8], offset: usize, value: i32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Parsed bitmap header.
///
/// Keeps the raw 54 bytes alongside the decoded fields so that writing a
/// header back out reproduces every byte that was not deliberately changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    raw: [u8; BMP_HEADER_SIZE],
    pixel_offset: u32,
    width: i32,
    height: i32,
    bits_per_pixel: u16,
}

impl BmpHeader {
    /// Parse and validate a header from the first 54 bytes of `bytes`.
    ///
    /// # Errors
    ///
    /// - [`IoError::Truncated`] if fewer than 54 bytes are given
    /// - [`IoError::Format`] if width or height is not positive, bits per
    ///   pixel is not a positive multiple of 8, or the pixel offset points
    ///   inside the header
    pub fn parse(bytes: &[u8]) -> IoResult<Self> {
        if bytes.len() < BMP_HEADER_SIZE {
            return Err(IoError::Truncated {
                section: "header",
                expected: BMP_HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let mut raw = [0u8; BMP_HEADER_SIZE];
        raw.copy_from_slice(&bytes[..BMP_HEADER_SIZE]);

        let pixel_offset = read_u32_le(&raw, PIXEL_OFFSET_FIELD);
        let width = read_i32_le(&raw, WIDTH_FIELD);
        let height = read_i32_le(&raw, HEIGHT_FIELD);
        let bits_per_pixel = read_u16_le(&raw, BITS_PER_PIXEL_FIELD);

        if width <= 0 || height <= 0 {
            return Err(IoError::Format(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if bits_per_pixel == 0 || bits_per_pixel % 8 != 0 {
            return Err(IoError::Format(format!(
                "bits per pixel must be a positive multiple of 8, got {}",
                bits_per_pixel
            )));
        }
        if (pixel_offset as usize) < BMP_HEADER_SIZE {
            return Err(IoError::Format(format!(
                "pixel data offset {} lies inside the {}-byte header",
                pixel_offset, BMP_HEADER_SIZE
            )));
        }

        Ok(Self {
            raw,
            pixel_offset,
            width,
            height,
            bits_per_pixel,
        })
    }

    /// Whether the header starts with the `BM` signature
    pub fn has_signature(&self) -> bool {
        &self.raw[0..2] == b"BM"
    }

    /// Byte offset from the start of the file to the pixel array
    pub fn pixel_offset(&self) -> u32 {
        self.pixel_offset
    }

    /// Image width in pixels (always positive)
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Image height in pixels (always positive)
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Bits per pixel (a positive multiple of 8)
    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel as u32
    }

    /// Length of the metadata gap between header and pixel data
    pub fn gap_len(&self) -> usize {
        self.pixel_offset as usize - BMP_HEADER_SIZE
    }

    /// Size of the pixel array, `width * height * bits_per_pixel / 8`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Format`] if the size does not fit in `usize`.
    pub fn image_size(&self) -> IoResult<usize> {
        byte_size(self.width(), self.height(), self.bits_per_pixel())
            .map_err(|e| IoError::Format(e.to_string()))
    }

    /// Derive the header for an output image of `width` x `height`.
    ///
    /// Only the width and height fields change; every other byte, including
    /// fields this crate never interprets, is copied from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Format`] if a dimension is zero or exceeds `i32::MAX`.
    pub fn with_dimensions(&self, width: u32, height: u32) -> IoResult<Self> {
        let to_field = |v: u32| -> IoResult<i32> {
            match i32::try_from(v) {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(IoError::Format(format!(
                    "dimension {} cannot be stored in a header",
                    v
                ))),
            }
        };
        let width = to_field(width)?;
        let height = to_field(height)?;

        let mut raw = self.raw;
        write_i32_le(&mut raw, WIDTH_FIELD, width);
        write_i32_le(&mut raw, HEIGHT_FIELD, height);

        Ok(Self {
            raw,
            width,
            height,
            ..*self
        })
    }

    /// The raw header bytes
    pub fn as_bytes(&self) -> &[u8; BMP_HEADER_SIZE] {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(offset: u32, width: i32, height: i32, bpp: u16) -> Vec<u8> {
        let mut h = vec![0u8; BMP_HEADER_SIZE];
        h[0] = b'B';
        h[1] = b'M';
        h[10..14].copy_from_slice(&offset.to_le_bytes());
        h[14..18].copy_from_slice(&40u32.to_le_bytes());
        h[18..22].copy_from_slice(&width.to_le_bytes());
        h[22..26].copy_from_slice(&height.to_le_bytes());
        h[26..28].copy_from_slice(&1u16.to_le_bytes());
        h[28..30].copy_from_slice(&bpp.to_le_bytes());
        h
    }

    #[test]
    fn test_le_helpers() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(read_u16_le(&bytes, 0), 0x0201);
        assert_eq!(read_u32_le(&bytes, 0), 0x0403_0201);
        assert_eq!(read_i32_le(&bytes, 4), -1);
        assert_eq!(read_u16_le(&bytes, 3), 0xff04);
    }

    #[test]
    fn test_parse_fields() {
        let h = BmpHeader::parse(&header_bytes(54, 640, 480, 24)).unwrap();
        assert_eq!(h.pixel_offset(), 54);
        assert_eq!(h.width(), 640);
        assert_eq!(h.height(), 480);
        assert_eq!(h.bits_per_pixel(), 24);
        assert_eq!(h.gap_len(), 0);
        assert_eq!(h.image_size().unwrap(), 640 * 480 * 3);
        assert!(h.has_signature());
    }

    #[test]
    fn test_parse_short_input() {
        let err = BmpHeader::parse(&[0u8; 20]).unwrap_err();
        assert!(matches!(
            err,
            IoError::Truncated {
                section: "header",
                expected: 54,
                actual: 20
            }
        ));
    }

    #[test]
    fn test_parse_rejects_non_positive_dimensions() {
        assert!(matches!(
            BmpHeader::parse(&header_bytes(54, 0, 10, 24)),
            Err(IoError::Format(_))
        ));
        assert!(matches!(
            BmpHeader::parse(&header_bytes(54, 10, -10, 24)),
            Err(IoError::Format(_))
        ));
    }

    #[test]
    fn test_parse_rejects_bad_depth_and_offset() {
        assert!(matches!(
            BmpHeader::parse(&header_bytes(54, 10, 10, 0)),
            Err(IoError::Format(_))
        ));
        assert!(matches!(
            BmpHeader::parse(&header_bytes(54, 10, 10, 4)),
            Err(IoError::Format(_))
        ));
        assert!(matches!(
            BmpHeader::parse(&header_bytes(40, 10, 10, 24)),
            Err(IoError::Format(_))
        ));
    }

    #[test]
    fn test_image_size_overflow_is_format_error() {
        let h = BmpHeader::parse(&header_bytes(54, i32::MAX, i32::MAX, 64)).unwrap();
        assert!(matches!(h.image_size(), Err(IoError::Format(_))));
    }

    #[test]
    fn test_with_dimensions_only_patches_size_fields() {
        let mut bytes = header_bytes(60, 4, 2, 24);
        // Resolution fields should survive untouched
        bytes[38..42].copy_from_slice(&2835u32.to_le_bytes());
        let h = BmpHeader::parse(&bytes).unwrap();

        let rotated = h.with_dimensions(2, 4).unwrap();
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 4);
        assert_eq!(rotated.pixel_offset(), 60);
        assert_eq!(read_i32_le(rotated.as_bytes(), 18), 2);
        assert_eq!(read_i32_le(rotated.as_bytes(), 22), 4);

        for (i, (a, b)) in h.as_bytes().iter().zip(rotated.as_bytes()).enumerate() {
            if !(18..26).contains(&i) {
                assert_eq!(a, b, "byte {} changed", i);
            }
        }
        // The source header is not mutated
        assert_eq!(h.width(), 4);
        assert_eq!(h.height(), 2);
    }

    #[test]
    fn test_with_dimensions_rejects_unrepresentable() {
        let h = BmpHeader::parse(&header_bytes(54, 4, 2, 24)).unwrap();
        assert!(matches!(h.with_dimensions(0, 4), Err(IoError::Format(_))));
        assert!(matches!(
            h.with_dimensions(u32::MAX, 4),
            Err(IoError::Format(_))
        ));
    }
}
