//! pixturn-io - Bitmap loading and writing
//!
//! Reads an uncompressed bitmap into a [`BmpImage`] (header, opaque metadata
//! gap, pixel buffer) and writes images back with a header derived for the
//! output dimensions.
//!
//! # Usage
//!
//! ```no_run
//! use pixturn_io::{read_image, write_image};
//!
//! let img = read_image("smi.bmp").unwrap();
//! write_image("copy.bmp", &img.header, &img.gap, &img.pixels).unwrap();
//! ```

pub mod bmp;
mod error;
pub mod header;

pub use bmp::{BmpImage, read_bmp, write_bmp};
pub use error::{IoError, IoResult};
pub use header::{BMP_HEADER_SIZE, BmpHeader};

use log::info;
use pixturn_core::PixelBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, ErrorKind};
use std::path::Path;

/// Read a bitmap from a file path.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, plus any
/// error from [`read_bmp`].
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<BmpImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IoError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IoError::Io(e),
    })?;
    let img = read_bmp(BufReader::new(file))?;
    info!(
        "read {}: {}x{}, offset {} bytes, image size {} bytes",
        path.display(),
        img.header.width(),
        img.header.height(),
        img.header.pixel_offset(),
        img.pixels.byte_len()
    );
    Ok(img)
}

/// Read a bitmap from memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<BmpImage> {
    read_bmp(Cursor::new(data))
}

/// Write a bitmap to a file path, creating or truncating it.
///
/// See [`write_bmp`] for how the header is derived.
pub fn write_image<P: AsRef<Path>>(
    path: P,
    header: &BmpHeader,
    gap: &[u8],
    pixels: &PixelBuffer,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_bmp(header, gap, pixels, BufWriter::new(file))?;
    info!("image saved as: {}", path.display());
    Ok(())
}

/// Write a bitmap to memory.
pub fn write_image_mem(header: &BmpHeader, gap: &[u8], pixels: &PixelBuffer) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(header.pixel_offset() as usize + pixels.byte_len());
    write_bmp(header, gap, pixels, &mut out)?;
    Ok(out)
}
