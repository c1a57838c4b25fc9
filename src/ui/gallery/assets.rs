// SPDX-License-Identifier: MPL-2.0
//! Embedded artwork images.

use iced::widget::svg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/artworks/"]
struct Artworks;

/// Returns an SVG handle for the embedded artwork at `path`.
///
/// `None` means the bundle was packaged without the file.
pub fn artwork_handle(path: &str) -> Option<svg::Handle> {
    Artworks::get(path).map(|file| svg::Handle::from_memory(file.data))
}

/// Returns whether `path` is part of the embedded bundle.
pub fn contains(path: &str) -> bool {
    Artworks::get(path).is_some()
}
