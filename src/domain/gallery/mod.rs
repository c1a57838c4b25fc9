// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! This module contains the artwork collection and the value objects that
//! drive navigation, independent of any presentation framework.

pub mod artwork;
pub mod index;
pub mod orientation;

// Re-export commonly used types
pub use artwork::{catalog, lookup, Artwork};
pub use index::{ArtworkIndex, ARTWORK_COUNT};
pub use orientation::{Orientation, OrientationPreference};
