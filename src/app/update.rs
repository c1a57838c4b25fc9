// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::Message;
use crate::domain::gallery::{Orientation, OrientationPreference};
use crate::ui::gallery;
use iced::{Size, Task};

/// Mutable view over the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub window_size: &'a mut Size,
    pub orientation: &'a mut Orientation,
    pub orientation_preference: OrientationPreference,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.update(message) {
        gallery::Event::ArtworkChanged(index) => {
            log::debug!("Showing artwork {index}");
        }
    }
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;

    let resolved = ctx.orientation_preference.resolve(size.width, size.height);
    if resolved != *ctx.orientation {
        log::debug!(
            "Orientation changed to {:?} ({}x{})",
            resolved,
            size.width,
            size.height
        );
        *ctx.orientation = resolved;
    }
    Task::none()
}
