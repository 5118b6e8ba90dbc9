//! Blank-canvas pages filled in row-major slot order

use crate::composition::asset::ImageAsset;
use crate::composition::cache::{ResampleCache, resample};
use crate::layout::LayoutPlan;
use image::imageops;
use image::{Rgb, RgbImage};

/// Colour of unfilled canvas and empty slots
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Canvas-sized bitmap together with its slot occupancy
#[derive(Debug, Clone)]
pub struct Page {
    bitmap: RgbImage,
    filled: usize,
    total_slots: usize,
    mirrored: bool,
}

impl Page {
    /// White page sized to the plan's canvas
    pub fn blank(plan: &LayoutPlan) -> Self {
        let canvas = plan.canvas();
        Self {
            bitmap: RgbImage::from_pixel(canvas.width, canvas.height, BACKGROUND),
            filled: 0,
            total_slots: plan.slots_per_page(),
            mirrored: false,
        }
    }

    /// Rendered page
    pub const fn bitmap(&self) -> &RgbImage {
        &self.bitmap
    }

    /// Consume the page, keeping only the bitmap
    pub fn into_bitmap(self) -> RgbImage {
        self.bitmap
    }

    /// Number of slots holding an image
    pub const fn filled(&self) -> usize {
        self.filled
    }

    /// Slot capacity of the page
    pub const fn total_slots(&self) -> usize {
        self.total_slots
    }

    /// Whether every slot holds an image
    pub const fn is_full(&self) -> bool {
        self.filled == self.total_slots
    }

    /// Whether the page is currently flipped for duplex printing
    pub const fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Flip the page horizontally
    pub fn mirror(&mut self) {
        imageops::flip_horizontal_in_place(&mut self.bitmap);
        self.mirrored = !self.mirrored;
    }

    fn place(&mut self, cell: &RgbImage, origin: (u32, u32)) {
        imageops::replace(
            &mut self.bitmap,
            cell,
            i64::from(origin.0),
            i64::from(origin.1),
        );
        self.filled += 1;
    }
}

/// Places assets onto pages according to a fixed layout plan
///
/// Each placement resamples its asset to the scaled cell size. With
/// [`Compositor::with_cache`] resamples are memoized per asset instead.
pub struct Compositor {
    plan: LayoutPlan,
    cache: Option<ResampleCache>,
}

impl Compositor {
    /// Compositor that resamples on every placement
    pub const fn new(plan: LayoutPlan) -> Self {
        Self { plan, cache: None }
    }

    /// Enable per-asset resample memoization
    #[must_use]
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(ResampleCache::new());
        self
    }

    /// Plan used for every page
    pub const fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    /// Resample cache, if enabled
    pub const fn cache(&self) -> Option<&ResampleCache> {
        self.cache.as_ref()
    }

    /// Compose one page from `images` in row-major order
    ///
    /// Entries past the page capacity are ignored; slicing overflow into
    /// further pages is the caller's job. `on_slot` receives the running
    /// filled count after each placement.
    pub fn compose<F>(&mut self, images: &[&ImageAsset], mut on_slot: F) -> Page
    where
        F: FnMut(usize),
    {
        let mut page = Page::blank(&self.plan);
        let target = self.plan.cell();

        for (index, asset) in images.iter().enumerate() {
            let Some(origin) = self.plan.slot_origin(index) else {
                break;
            };

            match self.cache.as_mut() {
                Some(cache) => page.place(cache.get_or_resample(asset, target), origin),
                None => page.place(&resample(asset, target), origin),
            }
            on_slot(page.filled);
        }

        page
    }
}

/// Compose a single page without a resample cache
pub fn compose(images: &[&ImageAsset], plan: &LayoutPlan) -> Page {
    Compositor::new(*plan).compose(images, |_| {})
}
