// SPDX-License-Identifier: MPL-2.0
//! Artwork index newtype.
//!
//! The gallery is a closed ring of artworks numbered from 1. `ArtworkIndex`
//! can only hold a value inside that ring, so every transition is total and
//! lookups never need a bounds check.

use std::fmt;

/// Number of artworks in the collection.
pub const ARTWORK_COUNT: u8 = 4;

/// Position of an artwork in the gallery, always within `1..=ARTWORK_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkIndex(u8);

impl ArtworkIndex {
    /// First artwork, shown when the gallery opens.
    pub const FIRST: Self = Self(1);

    /// Last artwork of the collection.
    pub const LAST: Self = Self(ARTWORK_COUNT);

    /// Creates an index, returning `None` outside `1..=ARTWORK_COUNT`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=ARTWORK_COUNT).contains(&value).then_some(Self(value))
    }

    /// Returns the 1-based position.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the following artwork, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 == ARTWORK_COUNT {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Returns the preceding artwork, wrapping from the first to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.0 == 1 {
            Self::LAST
        } else {
            Self(self.0 - 1)
        }
    }

    /// Iterates over every index in gallery order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=ARTWORK_COUNT).map(Self)
    }
}

impl Default for ArtworkIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ArtworkIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
