// SPDX-License-Identifier: MPL-2.0
//! The fixed artwork collection.
//!
//! Text is stored as Fluent message keys and images as embedded asset paths,
//! both addressed by the artwork index.

use super::index::{ArtworkIndex, ARTWORK_COUNT};

/// Immutable description of one artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    pub index: ArtworkIndex,
    /// Path of the image inside the embedded `assets/artworks/` folder.
    pub image: &'static str,
    /// Fluent key of the alternative text describing the image.
    pub description_key: &'static str,
    /// Fluent key of the artwork title.
    pub title_key: &'static str,
    /// Fluent key of the "artist (year)" caption.
    pub artist_year_key: &'static str,
}

static CATALOG: [Artwork; ARTWORK_COUNT as usize] = [
    Artwork {
        index: ArtworkIndex::FIRST,
        image: "artwork-1.svg",
        description_key: "artwork-1-description",
        title_key: "artwork-1-title",
        artist_year_key: "artwork-1-artist-year",
    },
    Artwork {
        index: ArtworkIndex::FIRST.next(),
        image: "artwork-2.svg",
        description_key: "artwork-2-description",
        title_key: "artwork-2-title",
        artist_year_key: "artwork-2-artist-year",
    },
    Artwork {
        index: ArtworkIndex::LAST.previous(),
        image: "artwork-3.svg",
        description_key: "artwork-3-description",
        title_key: "artwork-3-title",
        artist_year_key: "artwork-3-artist-year",
    },
    Artwork {
        index: ArtworkIndex::LAST,
        image: "artwork-4.svg",
        description_key: "artwork-4-description",
        title_key: "artwork-4-title",
        artist_year_key: "artwork-4-artist-year",
    },
];

/// Returns the artwork shown at `index`.
#[must_use]
pub fn lookup(index: ArtworkIndex) -> &'static Artwork {
    &CATALOG[usize::from(index.get() - 1)]
}

/// Returns the whole collection in gallery order.
#[must_use]
pub fn catalog() -> &'static [Artwork] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_returns_matching_index() {
        for index in ArtworkIndex::all() {
            assert_eq!(lookup(index).index, index);
        }
    }

    #[test]
    fn every_artwork_is_fully_populated() {
        for artwork in catalog() {
            assert!(!artwork.image.is_empty());
            assert!(!artwork.description_key.is_empty());
            assert!(!artwork.title_key.is_empty());
            assert!(!artwork.artist_year_key.is_empty());
        }
    }

    #[test]
    fn artworks_are_distinct() {
        let images: HashSet<_> = catalog().iter().map(|a| a.image).collect();
        let titles: HashSet<_> = catalog().iter().map(|a| a.title_key).collect();
        let captions: HashSet<_> = catalog().iter().map(|a| a.artist_year_key).collect();
        let descriptions: HashSet<_> = catalog().iter().map(|a| a.description_key).collect();

        assert_eq!(images.len(), catalog().len());
        assert_eq!(titles.len(), catalog().len());
        assert_eq!(captions.len(), catalog().len());
        assert_eq!(descriptions.len(), catalog().len());
    }
}
