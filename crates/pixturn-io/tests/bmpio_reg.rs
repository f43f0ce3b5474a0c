//! Bitmap I/O regression test
//!
//! Reads synthetic bitmaps from memory and from disk, checks the decoded
//! fields, and checks that writing reproduces the input byte for byte when
//! the dimensions are unchanged.

use pixturn_io::{
    BMP_HEADER_SIZE, IoError, read_image, read_image_mem, write_image, write_image_mem,
};
use pixturn_test::RegParams;
use pixturn_test::fixtures::{bmp_bytes, sequential_buffer};

#[test]
fn bmpio_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("bmpio");

    let pixels = sequential_buffer(4, 2, 24);
    let gap: Vec<u8> = (100..140).collect();
    let data = bmp_bytes(4, 2, 24, &gap, pixels.data());

    let img = read_image_mem(&data).expect("read fixture");
    rp.compare_values(4.0, img.header.width() as f64, 0.0);
    rp.compare_values(2.0, img.header.height() as f64, 0.0);
    rp.compare_values(24.0, img.header.bits_per_pixel() as f64, 0.0);
    rp.compare_values(
        (BMP_HEADER_SIZE + gap.len()) as f64,
        img.header.pixel_offset() as f64,
        0.0,
    );
    rp.compare_strings(&img.gap, &gap);
    rp.compare_buffers(&img.pixels, &pixels);

    // Unchanged dimensions: output is byte-identical to the input
    let out = write_image_mem(&img.header, &img.gap, &img.pixels).expect("write");
    rp.compare_strings(&out, &data);

    // Through the filesystem
    let path = rp.write_data(&data, "bmp").expect("write fixture");
    let from_disk = read_image(&path).expect("read from disk");
    rp.compare_buffers(&from_disk.pixels, &pixels);

    let dir = rp.output_dir().expect("output dir");
    let copy_path = format!("{}/copy.bmp", dir);
    write_image(&copy_path, &img.header, &img.gap, &img.pixels).expect("write to disk");
    let written = std::fs::read(&copy_path).expect("read back");
    rp.compare_strings(&written, &data);

    assert!(rp.cleanup(), "bmpio regression test failed");
}

#[test]
fn bmpio_errors_reg() {
    let mut rp = RegParams::new("bmpio_errors");

    // Missing file
    let missing = read_image("/nonexistent/dir/missing.bmp");
    let is_not_found = matches!(missing, Err(IoError::FileNotFound { .. }));
    rp.compare_values(1.0, if is_not_found { 1.0 } else { 0.0 }, 0.0);

    // Header shorter than 54 bytes
    let short = read_image_mem(&[b'B', b'M', 0, 0, 0]);
    let is_truncated = matches!(short, Err(IoError::Truncated { section: "header", .. }));
    rp.compare_values(1.0, if is_truncated { 1.0 } else { 0.0 }, 0.0);

    // Pixel data cut short
    let data = bmp_bytes(4, 4, 32, &[], &[0u8; 63]);
    let cut = read_image_mem(&data);
    let is_truncated = matches!(
        cut,
        Err(IoError::Truncated {
            section: "pixel data",
            expected: 64,
            actual: 63
        })
    );
    rp.compare_values(1.0, if is_truncated { 1.0 } else { 0.0 }, 0.0);

    // Zero width is rejected before any pixel read
    let data = bmp_bytes(0, 2, 24, &[], &[]);
    let bad = read_image_mem(&data);
    let is_format = matches!(bad, Err(IoError::Format(_)));
    rp.compare_values(1.0, if is_format { 1.0 } else { 0.0 }, 0.0);

    // Depth that is not a whole number of bytes
    let data = bmp_bytes(2, 2, 4, &[], &[0u8; 2]);
    let is_format = matches!(read_image_mem(&data), Err(IoError::Format(_)));
    rp.compare_values(1.0, if is_format { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "bmpio_errors regression test failed");
}
