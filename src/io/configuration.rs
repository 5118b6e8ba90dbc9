//! Layout and weight defaults plus the persisted JSON configuration

use crate::generation::GenerationRequest;
use crate::io::error::{MixerError, Result};
use crate::layout::Dimensions;
use crate::sampling::{Rarity, Variant};
use serde::{Deserialize, Serialize};
use std::path::Path;

// DIN A4 at 300 DPI
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 2480;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 3508;

/// Side length every source image is normalized to
pub const DEFAULT_CELL_SIZE: u32 = 500;
/// Default number of cells per row
pub const DEFAULT_IMAGES_PER_ROW: u32 = 6;

/// Default weight of the common A-type image
pub const DEFAULT_A_COMMON: f64 = 70.0;
/// Default weight of the uncommon A-type image
pub const DEFAULT_A_UNCOMMON: f64 = 25.0;
/// Default weight of the legendary A-type image
pub const DEFAULT_A_LEGENDARY: f64 = 5.0;
/// Default weight of the normal B-type image
pub const DEFAULT_B_NORMAL: f64 = 90.0;
/// Default weight of the special B-type image
pub const DEFAULT_B_SPECIAL: f64 = 10.0;

// Output settings
/// Base output filename
pub const DEFAULT_OUTPUT: &str = "ludo_mixed_output.png";
/// Default configuration file
pub const DEFAULT_CONFIG_FILE: &str = "sheetmix_config.json";
/// Marker inserted between the output stem and the page label
pub const PAGE_SUFFIX: &str = "_page";

/// Settings persisted between runs
///
/// Keys missing from a file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    /// Common A-type weight
    pub a_common: f64,
    /// Uncommon A-type weight
    pub a_uncommon: f64,
    /// Legendary A-type weight
    pub a_legendary: f64,
    /// Normal B-type weight
    pub b_normal: f64,
    /// Special B-type weight
    pub b_special: f64,
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Source cell side length in pixels
    pub cell_size: u32,
    /// Cells per row
    pub images_per_row: u32,
    /// Images across both categories, one page per stream when absent
    pub total_images: Option<usize>,
    /// Produce separate mirrored B pages
    pub duplex: bool,
    /// Ceiling on pages per stream
    pub max_pages: Option<usize>,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            a_common: DEFAULT_A_COMMON,
            a_uncommon: DEFAULT_A_UNCOMMON,
            a_legendary: DEFAULT_A_LEGENDARY,
            b_normal: DEFAULT_B_NORMAL,
            b_special: DEFAULT_B_SPECIAL,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            images_per_row: DEFAULT_IMAGES_PER_ROW,
            total_images: None,
            duplex: false,
            max_pages: None,
        }
    }
}

impl MixerConfig {
    /// Read a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not valid configuration JSON
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| MixerError::FileSystem {
            path: path.to_path_buf(),
            operation: "read configuration",
            source: e,
        })?;
        let config = serde_json::from_str(&text).map_err(|e| MixerError::ConfigFormat {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration cannot be serialized
    /// - The parent directory cannot be created
    /// - The file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).map_err(|e| MixerError::ConfigFormat {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| MixerError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(path, text).map_err(|e| MixerError::FileSystem {
            path: path.to_path_buf(),
            operation: "write configuration",
            source: e,
        })?;
        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Build the typed request consumed by the pipeline
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            total_images: self.total_images,
            rarity_weights: Rarity::weights(self.a_common, self.a_uncommon, self.a_legendary),
            variant_weights: Variant::weights(self.b_normal, self.b_special),
            canvas: Dimensions::new(self.canvas_width, self.canvas_height),
            cell: Dimensions::square(self.cell_size),
            columns: self.images_per_row,
            duplex: self.duplex,
            max_pages: self.max_pages,
            cache_resamples: false,
        }
    }
}
