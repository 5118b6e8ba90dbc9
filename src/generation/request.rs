//! Immutable description of one generation run

use crate::io::configuration::{
    DEFAULT_A_COMMON, DEFAULT_A_LEGENDARY, DEFAULT_A_UNCOMMON, DEFAULT_B_NORMAL,
    DEFAULT_B_SPECIAL, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_CELL_SIZE,
    DEFAULT_IMAGES_PER_ROW,
};
use crate::io::error::Result;
use crate::layout::{Dimensions, LayoutPlan};
use crate::sampling::{Rarity, Variant, WeightSet};

/// Everything the pipeline needs, constructed once and passed by reference
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Images across both categories; `None` fills one page per stream
    pub total_images: Option<usize>,
    /// A-type weights, walked common, uncommon, legendary
    pub rarity_weights: WeightSet<Rarity>,
    /// B-type weights, special tested first
    pub variant_weights: WeightSet<Variant>,
    /// Output canvas in pixels
    pub canvas: Dimensions,
    /// Source cell size in pixels
    pub cell: Dimensions,
    /// Cells per row
    pub columns: u32,
    /// Separate mirrored B pages instead of mixed pages
    pub duplex: bool,
    /// Ceiling on pages per stream
    pub max_pages: Option<usize>,
    /// Memoize resamples per asset instead of resampling every placement
    pub cache_resamples: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            total_images: None,
            rarity_weights: Rarity::weights(
                DEFAULT_A_COMMON,
                DEFAULT_A_UNCOMMON,
                DEFAULT_A_LEGENDARY,
            ),
            variant_weights: Variant::weights(DEFAULT_B_NORMAL, DEFAULT_B_SPECIAL),
            canvas: Dimensions::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            cell: Dimensions::square(DEFAULT_CELL_SIZE),
            columns: DEFAULT_IMAGES_PER_ROW,
            duplex: false,
            max_pages: None,
            cache_resamples: false,
        }
    }
}

impl GenerationRequest {
    /// Layout plan for this request's canvas and cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the dimensions cannot form a grid
    pub fn plan(&self) -> Result<LayoutPlan> {
        LayoutPlan::compute(self.canvas, self.cell, self.columns)
    }

    /// Requested total, or exactly one full page per stream when unset
    pub fn requested_total(&self, slots_per_page: usize) -> usize {
        self.total_images.unwrap_or(if self.duplex {
            slots_per_page * 2
        } else {
            slots_per_page
        })
    }
}
