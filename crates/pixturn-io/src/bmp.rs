//! Uncompressed bitmap loading and writing
//!
//! A file is read as three consecutive sections: the fixed header, the
//! metadata gap (`pixel_offset - 54` opaque bytes), and exactly
//! `width * height * bits_per_pixel / 8` bytes of pixel data. Pixel rows are
//! not reoriented and no row padding is assumed.

use crate::header::{BMP_HEADER_SIZE, BmpHeader};
use crate::{IoError, IoResult};
use log::{debug, warn};
use pixturn_core::PixelBuffer;
use std::io::{Read, Write};

/// A loaded bitmap: header, metadata gap and pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpImage {
    /// Header as read from the file
    pub header: BmpHeader,
    /// Bytes between the header and the pixel data, kept verbatim
    pub gap: Vec<u8>,
    /// Pixel data
    pub pixels: PixelBuffer,
}

impl BmpImage {
    /// Pair new pixels with this image's metadata.
    ///
    /// The header is derived for the new buffer's dimensions; the gap is
    /// copied unchanged.
    pub fn with_pixels(&self, pixels: PixelBuffer) -> IoResult<BmpImage> {
        let header = self.header.with_dimensions(pixels.width(), pixels.height())?;
        Ok(BmpImage {
            header,
            gap: self.gap.clone(),
            pixels,
        })
    }

    /// Write this image to `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> IoResult<()> {
        write_bmp(&self.header, &self.gap, &self.pixels, writer)
    }
}

/// Read exactly `len` bytes, reporting how many arrived if the stream ends early.
///
/// Grows the buffer as data arrives, so a corrupt length never triggers a
/// large allocation up front.
fn read_section<R: Read>(reader: &mut R, len: usize, section: &'static str) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() < len {
        return Err(IoError::Truncated {
            section,
            expected: len,
            actual: buf.len(),
        });
    }
    Ok(buf)
}

/// Read a bitmap from a byte stream positioned at the start of the file.
///
/// # Errors
///
/// - [`IoError::Truncated`] if the header, gap or pixel data is cut short
/// - [`IoError::Format`] if the header fails validation; this is reported
///   before any pixel data is read
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<BmpImage> {
    let raw = read_section(&mut reader, BMP_HEADER_SIZE, "header")?;
    let header = BmpHeader::parse(&raw)?;
    if !header.has_signature() {
        warn!("bitmap header does not start with 'BM'; reading anyway");
    }

    let image_size = header.image_size()?;
    debug!(
        "bitmap header: {}x{} at {} bpp, pixel offset {}, image size {} bytes",
        header.width(),
        header.height(),
        header.bits_per_pixel(),
        header.pixel_offset(),
        image_size
    );

    let gap = read_section(&mut reader, header.gap_len(), "metadata gap")?;
    let data = read_section(&mut reader, image_size, "pixel data")?;
    let pixels = PixelBuffer::from_bytes(
        header.width(),
        header.height(),
        header.bits_per_pixel(),
        data,
    )?;

    Ok(BmpImage {
        header,
        gap,
        pixels,
    })
}

/// Write a bitmap: derived header, metadata gap, pixel data.
///
/// The header written is `header` with its width and height replaced by the
/// dimensions of `pixels`; `header` itself is left untouched.
///
/// # Errors
///
/// Returns [`IoError::Format`] if `gap` does not fill the space the header's
/// pixel offset reserves, or if the buffer depth differs from the header's.
pub fn write_bmp<W: Write>(
    header: &BmpHeader,
    gap: &[u8],
    pixels: &PixelBuffer,
    mut writer: W,
) -> IoResult<()> {
    if gap.len() != header.gap_len() {
        return Err(IoError::Format(format!(
            "metadata gap is {} bytes but the header reserves {}",
            gap.len(),
            header.gap_len()
        )));
    }
    if pixels.bits_per_pixel() != header.bits_per_pixel() {
        return Err(IoError::Format(format!(
            "buffer is {} bpp but the header declares {}",
            pixels.bits_per_pixel(),
            header.bits_per_pixel()
        )));
    }

    let out_header = header.with_dimensions(pixels.width(), pixels.height())?;
    writer.write_all(out_header.as_bytes())?;
    writer.write_all(gap)?;
    writer.write_all(pixels.data())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn bmp_bytes(width: i32, height: i32, bpp: u16, gap: &[u8], pixels: &[u8]) -> Vec<u8> {
        let offset = (BMP_HEADER_SIZE + gap.len()) as u32;
        let mut out = vec![0u8; BMP_HEADER_SIZE];
        out[0] = b'B';
        out[1] = b'M';
        out[2..6].copy_from_slice(&(offset + pixels.len() as u32).to_le_bytes());
        out[10..14].copy_from_slice(&offset.to_le_bytes());
        out[14..18].copy_from_slice(&40u32.to_le_bytes());
        out[18..22].copy_from_slice(&width.to_le_bytes());
        out[22..26].copy_from_slice(&height.to_le_bytes());
        out[26..28].copy_from_slice(&1u16.to_le_bytes());
        out[28..30].copy_from_slice(&bpp.to_le_bytes());
        out.extend_from_slice(gap);
        out.extend_from_slice(pixels);
        out
    }

    #[test]
    fn test_read_sections() {
        let pixels: Vec<u8> = (0..24).collect();
        let gap = [0xde, 0xad, 0xbe, 0xef];
        let data = bmp_bytes(4, 2, 24, &gap, &pixels);

        let img = read_bmp(Cursor::new(data)).unwrap();
        assert_eq!(img.header.width(), 4);
        assert_eq!(img.header.height(), 2);
        assert_eq!(img.gap, gap);
        assert_eq!(img.pixels.data(), &pixels[..]);
        assert_eq!(img.pixels.bits_per_pixel(), 24);
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let pixels = [7u8; 12];
        let mut data = bmp_bytes(2, 2, 24, &[], &pixels);
        data.extend_from_slice(&[1, 2, 3]);
        let img = read_bmp(Cursor::new(data)).unwrap();
        assert_eq!(img.pixels.data(), &pixels[..]);
    }

    #[test]
    fn test_truncated_pixel_data() {
        let data = bmp_bytes(4, 4, 24, &[], &[0u8; 40]);
        let err = read_bmp(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            IoError::Truncated {
                section: "pixel data",
                expected: 48,
                actual: 40
            }
        ));
    }

    #[test]
    fn test_truncated_gap() {
        let mut data = bmp_bytes(1, 1, 24, &[0u8; 16], &[]);
        data.truncate(BMP_HEADER_SIZE + 10);
        let err = read_bmp(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            IoError::Truncated {
                section: "metadata gap",
                expected: 16,
                actual: 10
            }
        ));
    }

    #[test]
    fn test_truncated_header() {
        let err = read_bmp(Cursor::new(vec![b'B', b'M', 0, 0])).unwrap_err();
        assert!(matches!(
            err,
            IoError::Truncated {
                section: "header",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_width_is_format_error() {
        // Claims a huge pixel payload after the header; must fail first
        let data = bmp_bytes(0, 1_000_000, 24, &[], &[]);
        assert!(matches!(
            read_bmp(Cursor::new(data)),
            Err(IoError::Format(_))
        ));
    }

    #[test]
    fn test_missing_signature_still_reads() {
        let mut data = bmp_bytes(1, 1, 24, &[], &[1, 2, 3]);
        data[0] = 0;
        data[1] = 0;
        let img = read_bmp(Cursor::new(data)).unwrap();
        assert!(!img.header.has_signature());
        assert_eq!(img.pixels.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_write_patches_dimensions_and_keeps_gap() {
        let gap = [9u8, 8, 7];
        let data = bmp_bytes(4, 2, 24, &gap, &[5u8; 24]);
        let img = read_bmp(Cursor::new(data.clone())).unwrap();

        let rotated = PixelBuffer::from_bytes(2, 4, 24, vec![5u8; 24]).unwrap();
        let mut out = Vec::new();
        write_bmp(&img.header, &img.gap, &rotated, &mut out).unwrap();

        assert_eq!(out.len(), data.len());
        assert_eq!(&out[18..22], &2i32.to_le_bytes());
        assert_eq!(&out[22..26], &4i32.to_le_bytes());
        assert_eq!(&out[..18], &data[..18]);
        assert_eq!(&out[26..], &data[26..]);

        let back = read_bmp(Cursor::new(out)).unwrap();
        assert_eq!(back.header.width(), 2);
        assert_eq!(back.header.height(), 4);
        assert_eq!(back.gap, gap);
    }

    #[test]
    fn test_write_rejects_inconsistent_gap_and_depth() {
        let data = bmp_bytes(2, 2, 24, &[1, 2], &[0u8; 12]);
        let img = read_bmp(Cursor::new(data)).unwrap();

        let mut out = Vec::new();
        assert!(matches!(
            write_bmp(&img.header, &[1], &img.pixels, &mut out),
            Err(IoError::Format(_))
        ));

        let rgba = PixelBuffer::new(2, 2, 32).unwrap();
        assert!(matches!(
            write_bmp(&img.header, &img.gap, &rgba, &mut out),
            Err(IoError::Format(_))
        ));
    }

    #[test]
    fn test_with_pixels() {
        let data = bmp_bytes(3, 1, 32, &[4, 4], &[1u8; 12]);
        let img = read_bmp(Cursor::new(data)).unwrap();
        let turned = PixelBuffer::from_bytes(1, 3, 32, vec![1u8; 12]).unwrap();
        let out = img.with_pixels(turned).unwrap();
        assert_eq!(out.header.width(), 1);
        assert_eq!(out.header.height(), 3);
        assert_eq!(out.gap, img.gap);
    }
}
