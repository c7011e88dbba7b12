//! Image-loading collaborator for the dataset indexes.
//!
//! The indexing core only deals in paths; this module turns a resolved
//! path into a CHW pixel tensor for consumers that want to look at the
//! actual data (the CLI uses it to report one sample shape).

use image::{DynamicImage, GenericImageView};
use std::path::Path;

use crate::error::Result;

/// A decoded image in channels-height-width layout.
#[derive(Debug, Clone)]
pub struct PixelTensor {
    pub data: Vec<f32>,
    pub channels: usize,
    pub height: usize,
    pub width: usize,
}

impl PixelTensor {
    /// The (channels, height, width) shape of the tensor.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.channels, self.height, self.width)
    }
}

/// Decode an image as RGB, optionally center-crop it to
/// `(width, height)`, and scale the pixels linearly into `pixel_range`.
pub fn load(
    path: &Path,
    crop_size: Option<(u32, u32)>,
    pixel_range: (f32, f32),
) -> Result<PixelTensor> {
    let img = image::open(path)?;
    let img = match crop_size {
        Some(size) => center_crop(&img, size),
        None => img,
    };
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (lo, hi) = pixel_range;

    let plane = (width * height) as usize;
    let mut data = vec![0.0f32; 3 * plane];
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let offset = (y * width + x) as usize;
        for (channel, &value) in pixel.0.iter().enumerate() {
            data[channel * plane + offset] = lo + (value as f32 / 255.0) * (hi - lo);
        }
    }

    Ok(PixelTensor {
        data,
        channels: 3,
        height: height as usize,
        width: width as usize,
    })
}

/// Decode a mask as a single binary channel: 1.0 for forged pixels,
/// 0.0 elsewhere.
pub fn load_mask(path: &Path, crop_size: Option<(u32, u32)>) -> Result<PixelTensor> {
    let img = image::open(path)?;
    let img = match crop_size {
        Some(size) => center_crop(&img, size),
        None => img,
    };
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();

    let data = gray
        .pixels()
        .map(|pixel| if pixel.0[0] >= 128 { 1.0 } else { 0.0 })
        .collect();

    Ok(PixelTensor {
        data,
        channels: 1,
        height: height as usize,
        width: width as usize,
    })
}

// Crop to the centered (width, height) window, clamped to the image size.
fn center_crop(img: &DynamicImage, (crop_w, crop_h): (u32, u32)) -> DynamicImage {
    let (width, height) = img.dimensions();
    let crop_w = crop_w.min(width);
    let crop_h = crop_h.min(height);
    img.crop_imm((width - crop_w) / 2, (height - crop_h) / 2, crop_w, crop_h)
}
