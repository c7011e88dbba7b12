//! Index builder for the COVERAGE copy-move forgery database.
//!
//! Directory layout:
//!
//! ```text
//! COVERAGE
//! ├── image
//! │   ├── 1.tif       # authentic
//! │   ├── 1t.tif      # tampered (trailing 't')
//! │   └── ...
//! └── mask
//!     ├── 1forged.tif
//!     ├── 1copy.tif
//!     ├── 1paste.tif
//!     └── ...
//! ```
//!
//! A stem ending in `t` marks the tampered variant; its masks live in
//! `mask/` with the `t` replaced by a mask-type suffix.

use log::debug;
use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::index::{list_images, DatasetIndex};
use crate::types::{IndexOptions, MaskType, Sample};

/// Build the COVERAGE index.
///
/// Authentic images come first in sorted order, then tampered images in
/// sorted order with one sample per selected mask type. Every derived
/// mask path must exist on disk or the build fails.
pub fn build(data_dir: &Path, mask_type: MaskType, opts: &IndexOptions) -> Result<DatasetIndex> {
    if opts.download {
        return Err(DatasetError::UnsupportedFeature("automated download"));
    }

    let image_dir = data_dir.join("image");
    let mask_dir = data_dir.join("mask");

    // Classify images by the trailing-'t' stem convention.
    let mut auth_images = Vec::new();
    let mut tamp_images = Vec::new();
    for path in list_images(&image_dir)? {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.ends_with('t') {
            tamp_images.push(path);
        } else {
            auth_images.push(path);
        }
    }
    debug!(
        "coverage: {} authentic, {} tampered images under {}",
        auth_images.len(),
        tamp_images.len(),
        image_dir.display()
    );

    let mut samples: Vec<Sample> = auth_images.into_iter().map(Sample::authentic).collect();

    // One sample per tampered image and selected mask type.
    for image in tamp_images {
        let stem = image
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let ext = image
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let base = stem.strip_suffix('t').unwrap_or(stem);
        for suffix in mask_type.suffixes() {
            let mask = mask_dir.join(format!("{base}{suffix}.{ext}"));
            if !mask.is_file() {
                return Err(DatasetError::MissingMask(mask));
            }
            samples.push(Sample::tampered(image.clone(), mask));
        }
    }

    Ok(DatasetIndex::from_samples(
        samples,
        opts.shuffle,
        opts.seed,
        opts.split,
    ))
}
