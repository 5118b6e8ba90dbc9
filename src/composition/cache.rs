use crate::composition::asset::ImageAsset;
use crate::layout::Dimensions;
use image::RgbImage;
use image::imageops::{self, FilterType};
use std::collections::HashMap;

/// Identifies one resample of one asset
///
/// Keyed on asset identity, not label: distinct bitmaps may share a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ResampleKey {
    asset: u64,
    target: Dimensions,
}

impl ResampleKey {
    /// Key for `asset` resampled to `target`
    pub const fn new(asset: &ImageAsset, target: Dimensions) -> Self {
        Self {
            asset: asset.id(),
            target,
        }
    }
}

/// Memoization cache for resampled assets
///
/// Output is pixel-identical to resampling on every placement; only the
/// Lanczos cost is saved when the same asset fills many cells.
#[derive(Default)]
pub struct ResampleCache {
    resampled: HashMap<ResampleKey, RgbImage>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl ResampleCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct resamples stored
    pub fn len(&self) -> usize {
        self.resampled.len()
    }

    /// Whether nothing has been resampled yet
    pub fn is_empty(&self) -> bool {
        self.resampled.is_empty()
    }

    /// Retrieve the cached resample or compute and store a new one
    pub fn get_or_resample(&mut self, asset: &ImageAsset, target: Dimensions) -> &RgbImage {
        use std::collections::hash_map::Entry;

        match self.resampled.entry(ResampleKey::new(asset, target)) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(resample(asset, target))
            }
        }
    }
}

/// Lanczos3 resample of `asset` to exactly `target`, ignoring aspect ratio
pub fn resample(asset: &ImageAsset, target: Dimensions) -> RgbImage {
    imageops::resize(
        asset.image(),
        target.width,
        target.height,
        FilterType::Lanczos3,
    )
}
