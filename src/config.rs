use clap::Parser;
use std::path::PathBuf;

use crate::types::{MaskType, Split};

/// Command-line arguments for indexing image-manipulation datasets.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the Defacto copy-move dataset directory
    #[arg(long = "copy-move-data-dir")]
    pub copy_move_data_dir: Option<PathBuf>,

    /// Path to the Defacto inpainting dataset directory
    #[arg(long = "inpainting-data-dir")]
    pub inpainting_data_dir: Option<PathBuf>,

    /// Path to the Defacto splicing dataset directory
    #[arg(long = "splicing-data-dir")]
    pub splicing_data_dir: Option<PathBuf>,

    /// Path to the CASIA2 dataset directory
    #[arg(long = "casia2-data-dir")]
    pub casia2_data_dir: Option<PathBuf>,

    /// Path to the COVERAGE dataset directory
    #[arg(long = "coverage-data-dir")]
    pub coverage_data_dir: Option<PathBuf>,

    /// Path to the IMD2020 dataset directory
    #[arg(long = "imd2020-data-dir")]
    pub imd2020_data_dir: Option<PathBuf>,

    /// Which COVERAGE mask variant(s) to index
    #[arg(long = "mask-type", value_enum, default_value = "all")]
    pub mask_type: MaskType,

    /// Which split of each index to keep
    #[arg(long = "split", value_enum, default_value = "full")]
    pub split: Split,

    /// Seed for random shuffling
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Keep the sorted filename order instead of shuffling
    #[arg(long = "no-shuffle")]
    pub no_shuffle: bool,

    /// Center-crop size applied when decoding the reported sample, as WIDTHxHEIGHT
    #[arg(long = "crop-size", value_parser = parse_crop_size)]
    pub crop_size: Option<(u32, u32)>,
}

impl Args {
    /// Whether at least one dataset directory was given.
    pub fn any_dataset_selected(&self) -> bool {
        self.copy_move_data_dir.is_some()
            || self.inpainting_data_dir.is_some()
            || self.splicing_data_dir.is_some()
            || self.casia2_data_dir.is_some()
            || self.coverage_data_dir.is_some()
            || self.imd2020_data_dir.is_some()
    }
}

// Parse a WIDTHxHEIGHT crop size with both sides non-zero
fn parse_crop_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| "CROP_SIZE must look like 256x256".to_string())?;
    match (w.trim().parse::<u32>(), h.trim().parse::<u32>()) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err("CROP_SIZE sides must be positive integers".to_string()),
    }
}
