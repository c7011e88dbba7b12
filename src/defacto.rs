//! Index builders for the Defacto family: copy-move, splicing, and
//! inpainting. Every Defacto image is tampered; masks are matched by stem.
//!
//! Directory layout, with `<prefix>` one of `copymove`, `splicing`, or
//! `inpainting` and `<masks>` either `probe_mask` or `inpaint_mask`:
//!
//! ```text
//! root
//! ├── <prefix>_img
//! │   └── img
//! │       └── <name>.tif
//! └── <prefix>_annotations
//!     └── <masks>
//!         └── <name>.jpg
//! ```

use log::debug;
use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::index::{list_images, DatasetIndex};
use crate::types::{IndexOptions, Sample};

/// Build the Defacto copy-move index.
pub fn copy_move(data_dir: &Path, opts: &IndexOptions) -> Result<DatasetIndex> {
    build(data_dir, "copymove", "probe_mask", opts)
}

/// Build the Defacto splicing index.
pub fn splicing(data_dir: &Path, opts: &IndexOptions) -> Result<DatasetIndex> {
    build(data_dir, "splicing", "probe_mask", opts)
}

/// Build the Defacto inpainting index.
pub fn inpainting(data_dir: &Path, opts: &IndexOptions) -> Result<DatasetIndex> {
    build(data_dir, "inpainting", "inpaint_mask", opts)
}

fn build(
    data_dir: &Path,
    prefix: &str,
    mask_subdir: &str,
    opts: &IndexOptions,
) -> Result<DatasetIndex> {
    if opts.download {
        return Err(DatasetError::UnsupportedFeature("automated download"));
    }

    let image_dir = data_dir.join(format!("{prefix}_img")).join("img");
    let mask_dir = data_dir
        .join(format!("{prefix}_annotations"))
        .join(mask_subdir);

    let mut samples = Vec::new();
    for image in list_images(&image_dir)? {
        let Some(stem) = image.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let mask = mask_dir.join(format!("{stem}.jpg"));
        if !mask.is_file() {
            return Err(DatasetError::MissingMask(mask));
        }
        samples.push(Sample::tampered(image, mask));
    }
    debug!(
        "defacto {}: {} samples under {}",
        prefix,
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
