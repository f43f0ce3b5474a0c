//! In-memory test fixtures
//!
//! Small synthetic bitmaps whose every byte is known, so rotation and
//! filter results can be checked against hand-computed values.

use crate::{TestError, TestResult};
use pixturn_core::PixelBuffer;
use pixturn_io::{BMP_HEADER_SIZE, BmpImage, read_image_mem};

/// Build a complete bitmap byte stream.
///
/// The header carries a `BM` signature, a 40-byte info header size, one
/// plane and a file size consistent with `gap` and `pixels`. Width and height
/// are written as given, so invalid values can be used to exercise header
/// validation.
pub fn bmp_bytes(width: i32, height: i32, bits_per_pixel: u16, gap: &[u8], pixels: &[u8]) -> Vec<u8> {
    let offset = (BMP_HEADER_SIZE + gap.len()) as u32;
    let file_size = offset + pixels.len() as u32;

    let mut out = vec![0u8; BMP_HEADER_SIZE];
    out[0..2].copy_from_slice(b"BM");
    out[2..6].copy_from_slice(&file_size.to_le_bytes());
    out[10..14].copy_from_slice(&offset.to_le_bytes());
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes());
    out[28..30].copy_from_slice(&bits_per_pixel.to_le_bytes());
    out[34..38].copy_from_slice(&(pixels.len() as u32).to_le_bytes());
    out.extend_from_slice(gap);
    out.extend_from_slice(pixels);
    out
}

/// Decode a synthetic bitmap built by [`bmp_bytes`] around `pixels`.
pub fn bmp_image(pixels: &PixelBuffer, gap: &[u8]) -> TestResult<BmpImage> {
    let data = bmp_bytes(
        pixels.width() as i32,
        pixels.height() as i32,
        pixels.bits_per_pixel() as u16,
        gap,
        pixels.data(),
    );
    read_image_mem(&data).map_err(|e| TestError::FixtureLoad {
        name: format!("{}x{}", pixels.width(), pixels.height()),
        message: e.to_string(),
    })
}

/// A buffer whose bytes count up from zero (wrapping at 256).
///
/// For images with fewer than 256 bytes every byte is distinct, so any
/// misplaced pixel or channel shows up in a comparison.
pub fn sequential_buffer(width: u32, height: u32, bits_per_pixel: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height, bits_per_pixel).expect("fixture geometry");
    for (i, b) in buf.data_mut().iter_mut().enumerate() {
        *b = i as u8;
    }
    buf
}

/// A buffer whose pixel bytes encode their own coordinate.
///
/// Channel 0 holds `x`, channel 1 holds `y` (both truncated to a byte), and
/// further channels hold `x ^ y` plus the channel index.
pub fn coordinate_buffer(width: u32, height: u32, bits_per_pixel: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height, bits_per_pixel).expect("fixture geometry");
    for y in 0..height {
        for x in 0..width {
            let px = buf.pixel_mut(x, y).expect("in bounds");
            for (c, b) in px.iter_mut().enumerate() {
                *b = match c {
                    0 => x as u8,
                    1 => y as u8,
                    _ => ((x ^ y) as u8).wrapping_add(c as u8),
                };
            }
        }
    }
    buf
}

/// A buffer where every pixel equals `pixel`.
pub fn uniform_buffer(width: u32, height: u32, pixel: &[u8]) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height, pixel.len() as u32 * 8).expect("fixture geometry");
    for chunk in buf.data_mut().chunks_exact_mut(pixel.len()) {
        chunk.copy_from_slice(pixel);
    }
    buf
}
