//! Dataset-indexing utilities for image-forensics research
//!
//! Given the root directory of a known image-manipulation dataset, the
//! builders in this crate enumerate matching (image, mask) pairs per that
//! dataset's filename convention, optionally shuffle them with a seeded
//! permutation, and optionally slice out a named split. Authentic images
//! carry no mask.

pub mod casia2;
pub mod config;
pub mod coverage;
pub mod defacto;
pub mod error;
pub mod imd2020;
pub mod index;
pub mod loader;
pub mod types;

// Re-export commonly used types and functions
pub use config::Args;
pub use error::{DatasetError, Result};
pub use index::DatasetIndex;
pub use loader::{load, load_mask, PixelTensor};
pub use types::{IndexOptions, MaskType, Sample, Split};
