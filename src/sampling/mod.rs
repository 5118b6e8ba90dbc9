//! Weighted random assignment of category labels to grid slots

/// Independent per-slot weighted draws
pub mod assignment;
/// Category and label vocabularies for the two image pools
pub mod labels;
/// Weight tables and their normalized distributions
pub mod weights;

pub use assignment::assign;
pub use labels::{Category, Rarity, Variant};
pub use weights::{DrawRule, WeightSet};
