use clap::ValueEnum;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::DatasetError;

// Supported image formats
pub const IMG_FORMATS: &[&str] = &["bmp", "jpeg", "jpg", "png", "tif", "tiff", "webp"];

/// One entry of a dataset index: an image path and, for tampered images,
/// the path of the mask marking the manipulated pixels.
///
/// `mask` is `None` exactly when the image is authentic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sample {
    pub image: PathBuf,
    pub mask: Option<PathBuf>,
}

impl Sample {
    /// An untampered image with no associated mask.
    pub fn authentic(image: PathBuf) -> Self {
        Self { image, mask: None }
    }

    /// A tampered image paired with its mask.
    pub fn tampered(image: PathBuf, mask: PathBuf) -> Self {
        Self {
            image,
            mask: Some(mask),
        }
    }

    pub fn is_authentic(&self) -> bool {
        self.mask.is_none()
    }
}

/// Which Coverage mask variant(s) to pair with each tampered image.
///
/// `All` selects every variant, duplicating the tampered image once per
/// mask so each duplicate carries a different mask.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum MaskType {
    /// Mask of the whole forged region
    Forged,
    /// Mask of the copied source region
    Copy,
    /// Mask of the pasted target region
    Paste,
    /// One sample per tampered image for each of the three masks
    All,
}

impl MaskType {
    /// The filename suffixes selected by this mask type, in index order.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            MaskType::Forged => &["forged"],
            MaskType::Copy => &["copy"],
            MaskType::Paste => &["paste"],
            MaskType::All => &["forged", "copy", "paste"],
        }
    }
}

impl FromStr for MaskType {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forged" => Ok(MaskType::Forged),
            "copy" => Ok(MaskType::Copy),
            "paste" => Ok(MaskType::Paste),
            "all" => Ok(MaskType::All),
            _ => Err(DatasetError::InvalidOption(format!(
                "invalid mask type: {s:?}, must be one of 'forged', 'copy', 'paste', or 'all'"
            ))),
        }
    }
}

/// Named subset of the full index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Split {
    /// First 80% of the (possibly shuffled) index
    Train,
    /// Next 10%
    Valid,
    /// Final 10%
    Test,
    /// First 500 samples
    Benchmark,
    /// The whole index
    Full,
}

impl Split {
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Valid => "valid",
            Split::Test => "test",
            Split::Benchmark => "benchmark",
            Split::Full => "full",
        }
    }
}

impl FromStr for Split {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "train" => Ok(Split::Train),
            "valid" => Ok(Split::Valid),
            "test" => Ok(Split::Test),
            "benchmark" => Ok(Split::Benchmark),
            "full" => Ok(Split::Full),
            _ => Err(DatasetError::UnknownSplit(s.to_string())),
        }
    }
}

/// Options shared by every dataset builder.
#[derive(Debug, Clone, Copy)]
pub struct IndexOptions {
    /// Shuffle the index with one seeded permutation before splitting
    pub shuffle: bool,
    /// Seed for the shuffle permutation
    pub seed: u64,
    /// Which split of the index to keep
    pub split: Split,
    /// Request automated download of the dataset (always rejected)
    pub download: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            shuffle: true,
            seed: 42,
            split: Split::Full,
            download: false,
        }
    }
}

/// Check whether a path has one of the supported image extensions.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMG_FORMATS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
