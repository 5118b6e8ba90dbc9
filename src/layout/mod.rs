//! Grid layout planning for fixed-size cells on a fixed canvas

/// Scaled cell dimensions, rows and slot capacity per page
pub mod plan;

pub use plan::{Dimensions, LayoutPlan};
