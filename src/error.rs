use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for dataset indexing operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while building a dataset index.
///
/// All variants surface synchronously from the builder; a failed build
/// never exposes a partial index.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A mask-type or other option string outside the supported set.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// An expected mask file is absent on disk.
    #[error("expected mask file does not exist: {}", .0.display())]
    MissingMask(PathBuf),

    /// A split name outside train/valid/test/benchmark/full.
    #[error("unknown split name: {0:?}")]
    UnknownSplit(String),

    /// A requested feature that is deliberately not implemented.
    #[error("{0} is not supported")]
    UnsupportedFeature(&'static str),

    /// Underlying filesystem error while enumerating the dataset.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The image crate failed to decode a file.
    #[error("image decoding error: {0}")]
    Image(#[from] image::ImageError),
}
