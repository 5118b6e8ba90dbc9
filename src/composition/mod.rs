//! Page compositing: placing resampled assets into the planned grid

/// Read-only source bitmaps shared across grid cells
pub mod asset;
/// Optional memoization of per-asset resamples
pub mod cache;
/// Blank-canvas pages filled in row-major slot order
pub mod page;

pub use asset::{AssetSet, ImageAsset};
pub use page::{Compositor, Page, compose};
