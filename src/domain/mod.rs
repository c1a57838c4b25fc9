// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with no GUI dependencies.
//!
//! This module contains pure domain types, value objects, and business rules,
//! so they can be tested without spinning up the Iced runtime.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`ArtworkIndex`](gallery::ArtworkIndex),
//!   [`Artwork`](gallery::Artwork), [`Orientation`](gallery::Orientation))

pub mod gallery;
