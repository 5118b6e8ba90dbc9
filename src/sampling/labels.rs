//! Category and label vocabularies for the two image pools

use crate::sampling::weights::WeightSet;
use std::fmt;

/// The two image pools combined 1:1 on each sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Three rarity levels, drawn by cumulative walk
    A,
    /// Normal or special, drawn by a single Bernoulli test
    B,
}

impl Category {
    /// Suffix used in page file names
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A-type",
            Self::B => "B-type",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A-type rarity levels in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    /// Most frequent
    Common,
    /// Less frequent
    Uncommon,
    /// Least frequent
    Legendary,
}

impl Rarity {
    /// All rarities in draw order
    pub const ALL: [Self; 3] = [Self::Common, Self::Uncommon, Self::Legendary];

    /// Lowercase label
    pub const fn name(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Legendary => "legendary",
        }
    }

    /// A-type weight set walked common, uncommon, legendary
    pub fn weights(common: f64, uncommon: f64, legendary: f64) -> WeightSet<Self> {
        WeightSet::cumulative(
            Category::A.name(),
            vec![
                (Self::Common, common),
                (Self::Uncommon, uncommon),
                (Self::Legendary, legendary),
            ],
        )
    }
}

/// B-type variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Fallback variant
    Normal,
    /// Variant checked first
    Special,
}

impl Variant {
    /// All variants, normal first
    pub const ALL: [Self; 2] = [Self::Normal, Self::Special];

    /// Lowercase label
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Special => "special",
        }
    }

    /// B-type weight set testing special first, falling back to normal
    pub fn weights(normal: f64, special: f64) -> WeightSet<Self> {
        WeightSet::binary(
            Category::B.name(),
            (Self::Special, special),
            (Self::Normal, normal),
        )
    }
}
