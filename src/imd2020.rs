//! Index builder for the IMD2020 real-life manipulated image dataset.
//!
//! The root holds one subdirectory per scene, each containing the original
//! image (stem ending in `_orig`), one or more manipulated versions, and a
//! `<stem>_mask.png` for every manipulated version:
//!
//! ```text
//! IMD2020
//! └── z1c9v0h8
//!     ├── z1c9v0h8_orig.jpg
//!     ├── z1c9v0h8_0.png
//!     └── z1c9v0h8_0_mask.png
//! ```

use jwalk::WalkDir;
use log::debug;
use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::index::DatasetIndex;
use crate::types::{is_image_file, IndexOptions, Sample};

/// Build the IMD2020 index by walking the per-scene subdirectories.
///
/// Mask files themselves are never indexed as images; every non-original
/// image must have a sibling `<stem>_mask.png`.
pub fn build(data_dir: &Path, opts: &IndexOptions) -> Result<DatasetIndex> {
    if opts.download {
        return Err(DatasetError::UnsupportedFeature("automated download"));
    }
    if !data_dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no such directory: {}", data_dir.display()),
        )
        .into());
    }

    // The walk order is not deterministic across platforms; sort before
    // classifying so the pre-shuffle index order always matches.
    let mut files: Vec<_> = WalkDir::new(data_dir)
        .skip_hidden(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path())
        .filter(|path| is_image_file(path))
        .collect();
    files.sort();

    let mut samples = Vec::new();
    for image in files {
        let Some(stem) = image.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.ends_with("_mask") {
            continue;
        }
        if stem.ends_with("_orig") {
            samples.push(Sample::authentic(image));
        } else {
            let mask = image.with_file_name(format!("{stem}_mask.png"));
            if !mask.is_file() {
                return Err(DatasetError::MissingMask(mask));
            }
            samples.push(Sample::tampered(image, mask));
        }
    }
    debug!(
        "imd2020: {} samples under {}",
        samples.len(),
        data_dir.display()
    );

    Ok(DatasetIndex::from_samples(
        samples,
        opts.shuffle,
        opts.seed,
        opts.split,
    ))
}
