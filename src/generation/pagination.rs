//! Page counts, stream labels and odd-count adjustment

use crate::io::error::{Result, invalid_configuration};
use crate::sampling::Category;
use std::fmt;

/// Number of pages needed to hold `total` images at `slots_per_page` each
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `slots_per_page` is zero
pub fn page_count(total: usize, slots_per_page: usize) -> Result<usize> {
    if slots_per_page == 0 {
        return Err(invalid_configuration(
            "slots_per_page",
            &slots_per_page,
            &"a page must hold at least one image",
        ));
    }
    Ok(total.div_ceil(slots_per_page))
}

/// Images held by each page: full pages followed by the remainder
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `slots_per_page` is zero
pub fn page_sizes(total: usize, slots_per_page: usize) -> Result<Vec<usize>> {
    let pages = page_count(total, slots_per_page)?;
    Ok((0..pages)
        .map(|page| slots_per_page.min(total - page * slots_per_page))
        .collect())
}

/// Requested image total rounded up to keep the two categories balanced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountAdjustment {
    requested: usize,
    effective: usize,
}

impl CountAdjustment {
    /// Round `requested` up to the next even number
    pub const fn even(requested: usize) -> Self {
        Self {
            requested,
            effective: requested.saturating_add(requested % 2),
        }
    }

    /// Total as asked for
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Total actually generated
    pub const fn effective(&self) -> usize {
        self.effective
    }

    /// Images drawn for each category
    pub const fn per_category(&self) -> usize {
        self.effective / 2
    }

    /// Whether the total had to be raised
    pub const fn was_adjusted(&self) -> bool {
        self.requested != self.effective
    }
}

/// Sequence of pages sharing a label and mirroring rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageStream {
    /// Both categories shuffled together onto the same pages
    Mixed,
    /// One category per page, for duplex printing
    Category(Category),
}

impl PageStream {
    /// Whether every page of the stream is flipped horizontally
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::Category(Category::B))
    }
}

impl fmt::Display for PageStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mixed => f.write_str("mixed"),
            Self::Category(category) => write!(f, "{category}"),
        }
    }
}

/// Position of a page within its stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageId {
    /// Stream the page belongs to
    pub stream: PageStream,
    /// 1-based page number
    pub number: usize,
    /// Pages in the stream
    pub of: usize,
}
