//! Index builder for the CASIA v2.0 image tampering dataset.
//!
//! Directory layout:
//!
//! ```text
//! CASIA2
//! ├── Au                      # authentic images
//! ├── Tp                      # tampered images
//! └── CASIA 2 Groundtruth     # <tampered-stem>_gt.png masks
//! ```

use log::debug;
use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::index::{list_images, DatasetIndex};
use crate::types::{IndexOptions, Sample};

const MASK_DIR: &str = "CASIA 2 Groundtruth";

/// Build the CASIA2 index: sorted authentic images first, then sorted
/// tampered images each paired with its `_gt` mask.
pub fn build(data_dir: &Path, opts: &IndexOptions) -> Result<DatasetIndex> {
    if opts.download {
        return Err(DatasetError::UnsupportedFeature("automated download"));
    }

    let mask_dir = data_dir.join(MASK_DIR);

    let mut samples: Vec<Sample> = list_images(&data_dir.join("Au"))?
        .into_iter()
        .map(Sample::authentic)
        .collect();
    let auth_count = samples.len();

    for image in list_images(&data_dir.join("Tp"))? {
        let Some(stem) = image.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let mask = mask_dir.join(format!("{stem}_gt.png"));
        if !mask.is_file() {
            return Err(DatasetError::MissingMask(mask));
        }
        samples.push(Sample::tampered(image, mask));
    }
    debug!(
        "casia2: {} authentic, {} tampered images under {}",
        auth_count,
        samples.len() - auth_count,
        data_dir.display()
    );

    Ok(DatasetIndex::from_samples(
        samples,
        opts.shuffle,
        opts.seed,
        opts.split,
    ))
}
