//! PNG loading and normalization of source images to the cell size

use crate::composition::{AssetSet, ImageAsset};
use crate::io::error::{MixerError, Result};
use crate::layout::Dimensions;
use crate::sampling::{Rarity, Variant};
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};
use std::path::{Path, PathBuf};

/// Locations of the five source images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Common A-type image
    pub common: PathBuf,
    /// Uncommon A-type image
    pub uncommon: PathBuf,
    /// Legendary A-type image
    pub legendary: PathBuf,
    /// Normal B-type image
    pub normal: PathBuf,
    /// Special B-type image
    pub special: PathBuf,
}

/// Loads PNG files and forces them to the cell size
#[derive(Debug, Clone, Copy)]
pub struct AssetLoader {
    cell: Dimensions,
    strict: bool,
}

impl AssetLoader {
    /// Loader resizing mismatched images to `cell`
    pub const fn new(cell: Dimensions) -> Self {
        Self {
            cell,
            strict: false,
        }
    }

    /// Reject mismatched images instead of resizing them
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load one PNG as an asset labelled `label`
    ///
    /// Mismatched sizes are resampled with Lanczos3 to exactly the cell
    /// size, without preserving aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The content is not PNG
    /// - The image cannot be decoded
    /// - The size differs from the cell size in strict mode
    pub fn load(&self, path: &Path, label: &str) -> Result<ImageAsset> {
        let reader = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| MixerError::FileSystem {
                path: path.to_path_buf(),
                operation: "open image",
                source: e,
            })?;

        match reader.format() {
            Some(ImageFormat::Png) => {}
            other => {
                return Err(MixerError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    format: other.map_or_else(|| "unknown".to_string(), |f| format!("{f:?}")),
                });
            }
        }

        let mut image = reader.decode().map_err(|e| MixerError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

        let actual = (image.width(), image.height());
        let expected = (self.cell.width, self.cell.height);
        if actual != expected {
            if self.strict {
                return Err(MixerError::AssetSizeMismatch {
                    path: path.to_path_buf(),
                    expected,
                    actual,
                });
            }
            tracing::warn!(
                path = %path.display(),
                width = actual.0,
                height = actual.1,
                target = expected.0,
                "image will be resized to the cell size"
            );
            image = image.resize_exact(expected.0, expected.1, FilterType::Lanczos3);
        }

        tracing::debug!(label, path = %path.display(), "asset loaded");
        Ok(ImageAsset::from_dynamic(label, &image))
    }

    /// Load all five assets
    ///
    /// # Errors
    ///
    /// Returns the first loading error encountered
    pub fn load_set(&self, paths: &AssetPaths) -> Result<AssetSet> {
        Ok(AssetSet::new(
            self.load(&paths.common, Rarity::Common.name())?,
            self.load(&paths.uncommon, Rarity::Uncommon.name())?,
            self.load(&paths.legendary, Rarity::Legendary.name())?,
            self.load(&paths.normal, Variant::Normal.name())?,
            self.load(&paths.special, Variant::Special.name())?,
        ))
    }
}
