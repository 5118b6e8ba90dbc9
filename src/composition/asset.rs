//! Read-only source bitmaps shared across grid cells

use crate::layout::Dimensions;
use crate::sampling::{Rarity, Variant};
use image::{DynamicImage, RgbImage};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ASSET_ID: AtomicU64 = AtomicU64::new(0);

/// Fixed-size opaque bitmap tagged with the label it was loaded for
///
/// The compositor only borrows assets, so one asset may fill any number of
/// cells across any number of pages. Every constructed asset gets a fresh
/// id; clones share it since they share the pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    id: u64,
    label: String,
    image: RgbImage,
}

impl ImageAsset {
    /// Wrap an RGB bitmap
    pub fn new(label: impl Into<String>, image: RgbImage) -> Self {
        Self {
            id: NEXT_ASSET_ID.fetch_add(1, Ordering::Relaxed),
            label: label.into(),
            image,
        }
    }

    /// Wrap a decoded image, discarding any alpha channel
    pub fn from_dynamic(label: impl Into<String>, image: &DynamicImage) -> Self {
        Self::new(label, image.to_rgb8())
    }

    /// Process-unique identity, used as the resample cache key
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Label the asset was loaded for
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Underlying bitmap
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Bitmap size in pixels
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.image.width(), self.image.height())
    }
}

/// The five assets a sheet is drawn from, addressed by label
#[derive(Debug, Clone)]
pub struct AssetSet {
    common: ImageAsset,
    uncommon: ImageAsset,
    legendary: ImageAsset,
    normal: ImageAsset,
    special: ImageAsset,
}

impl AssetSet {
    /// Group the A-type rarities and B-type variants
    pub const fn new(
        common: ImageAsset,
        uncommon: ImageAsset,
        legendary: ImageAsset,
        normal: ImageAsset,
        special: ImageAsset,
    ) -> Self {
        Self {
            common,
            uncommon,
            legendary,
            normal,
            special,
        }
    }

    /// Asset drawn for an A-type rarity
    pub const fn rarity(&self, rarity: Rarity) -> &ImageAsset {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Uncommon => &self.uncommon,
            Rarity::Legendary => &self.legendary,
        }
    }

    /// Asset drawn for a B-type variant
    pub const fn variant(&self, variant: Variant) -> &ImageAsset {
        match variant {
            Variant::Normal => &self.normal,
            Variant::Special => &self.special,
        }
    }
}
