//! End-to-end pipeline
//!
//! Load → rotate right → rotate left → blur the right rotation → write.
//!
//! All three output images are computed in memory before any file is
//! written, so a failure in any stage leaves no partial outputs behind.

use crate::{Config, PipelineResult};
use log::info;
use pixturn_filter::gaussian_blur;
use pixturn_io::{BmpImage, read_image, write_image};
use pixturn_transform::{rotate_ccw, rotate_cw};
use std::path::PathBuf;

/// The three images produced from one input
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Input rotated 90° clockwise
    pub rotated_right: BmpImage,
    /// Input rotated 90° counter-clockwise
    pub rotated_left: BmpImage,
    /// `rotated_right` after the Gaussian blur
    pub blurred: BmpImage,
}

/// Run rotation and filtering on a loaded image.
///
/// Each output carries a header derived for its dimensions and the input's
/// metadata gap. The input is not modified.
pub fn process(image: &BmpImage, sigma: f32) -> PipelineResult<PipelineOutput> {
    let right = rotate_cw(&image.pixels)?;
    let left = rotate_ccw(&image.pixels)?;
    let blurred = gaussian_blur(&right, sigma)?;

    Ok(PipelineOutput {
        rotated_right: image.with_pixels(right)?,
        rotated_left: image.with_pixels(left)?,
        blurred: image.with_pixels(blurred)?,
    })
}

/// Read the configured input, process it, and write the three outputs.
///
/// # Returns
///
/// The paths written, in order: right rotation, left rotation, blurred.
pub fn run(config: &Config) -> PipelineResult<Vec<PathBuf>> {
    config.validate()?;

    let image = read_image(&config.input)?;
    info!(
        "image width: {}, height: {}, offset: {} bytes, size: {} bytes",
        image.header.width(),
        image.header.height(),
        image.header.pixel_offset(),
        image.pixels.byte_len()
    );

    let output = process(&image, config.sigma)?;

    let targets = [
        (config.rotated_right_path(), &output.rotated_right),
        (config.rotated_left_path(), &output.rotated_left),
        (config.blurred_path(), &output.blurred),
    ];
    let mut written = Vec::with_capacity(targets.len());
    for (path, img) in targets {
        write_image(&path, &img.header, &img.gap, &img.pixels)?;
        written.push(path);
    }
    Ok(written)
}
