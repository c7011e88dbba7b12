use glob::glob;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{Sample, Split, IMG_FORMATS};

/// Fraction of the index assigned to the train split.
pub const TRAIN_FRACTION: f32 = 0.8;
/// Fraction of the index assigned to the valid split; test takes the rest.
pub const VALID_FRACTION: f32 = 0.1;
/// Number of samples in the benchmark split.
pub const BENCHMARK_SIZE: usize = 500;

/// An ordered, immutable sequence of (image, mask) samples.
///
/// Built once by a dataset builder; accessors return read-only views and
/// the two path sequences always have equal length.
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    samples: Vec<Sample>,
}

impl DatasetIndex {
    /// Apply the optional shuffle and split slicing to a freshly built
    /// sample list. The permutation moves each (image, mask) pair as a
    /// unit, so pairing stays intact.
    pub(crate) fn from_samples(
        mut samples: Vec<Sample>,
        shuffle: bool,
        seed: u64,
        split: Split,
    ) -> Self {
        if shuffle {
            let mut rng = StdRng::seed_from_u64(seed);
            samples.shuffle(&mut rng);
        }
        let range = split_range(split, samples.len());
        let samples = samples.drain(range).collect();
        Self { samples }
    }

    /// Number of samples in the index.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Read-only view of the samples in index order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// The ordered image paths of the index.
    pub fn image_files(&self) -> Vec<&Path> {
        self.samples.iter().map(|s| s.image.as_path()).collect()
    }

    /// The ordered mask paths of the index; `None` for authentic images.
    pub fn mask_files(&self) -> Vec<Option<&Path>> {
        self.samples
            .iter()
            .map(|s| s.mask.as_deref())
            .collect()
    }
}

impl<'a> IntoIterator for &'a DatasetIndex {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// The index range selected by a split over a sequence of `len` samples.
///
/// Cut points are floored so that train, valid, and test are disjoint and
/// together reconstruct the full sequence.
pub fn split_range(split: Split, len: usize) -> Range<usize> {
    let train_end = (len as f32 * TRAIN_FRACTION).floor() as usize;
    let valid_end = (len as f32 * (TRAIN_FRACTION + VALID_FRACTION)).floor() as usize;
    match split {
        Split::Train => 0..train_end,
        Split::Valid => train_end..valid_end,
        Split::Test => valid_end..len,
        Split::Benchmark => 0..len.min(BENCHMARK_SIZE),
        Split::Full => 0..len,
    }
}

/// List the image files directly under `dir`, sorted by path.
///
/// Sorting makes the pre-shuffle order independent of OS directory order.
pub(crate) fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no such directory: {}", dir.display()),
        )
        .into());
    }
    let mut files = Vec::new();
    for ext in IMG_FORMATS {
        let pattern = format!("{}/*.{}", dir.display(), ext);
        files.extend(
            glob(&pattern)
                .expect("image glob pattern is valid")
                .filter_map(|entry| entry.ok()),
        );
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ranges_partition_the_index() {
        for len in [0, 1, 5, 10, 99, 1000] {
            let train = split_range(Split::Train, len);
            let valid = split_range(Split::Valid, len);
            let test = split_range(Split::Test, len);
            assert_eq!(train.start, 0);
            assert_eq!(train.end, valid.start);
            assert_eq!(valid.end, test.start);
            assert_eq!(test.end, len);
        }
    }

    #[test]
    fn test_split_range_proportions() {
        assert_eq!(split_range(Split::Train, 10), 0..8);
        assert_eq!(split_range(Split::Valid, 10), 8..9);
        assert_eq!(split_range(Split::Test, 10), 9..10);
        assert_eq!(split_range(Split::Full, 10), 0..10);
    }

    #[test]
    fn test_benchmark_range_is_capped() {
        assert_eq!(split_range(Split::Benchmark, 10), 0..10);
        assert_eq!(split_range(Split::Benchmark, 1200), 0..BENCHMARK_SIZE);
    }
}
