// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded SVG logo at runtime to produce a RGBA icon for the
//! window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon.
const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/art_space.svg");

/// Rasterize the embedded SVG icon to a square RGBA buffer.
fn rasterize(svg: &str, size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = match usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            log::warn!("Failed to parse window icon: {err}");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = size as f32 / orig_size.width();
    let scale_y = size as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Returns the window icon, or `None` if it cannot be rendered.
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(SVG_SOURCE, ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
