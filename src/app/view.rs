// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::gallery::Orientation;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub orientation: Orientation,
}

/// Renders the gallery with the orientation resolved by the application.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    ctx.gallery
        .view(gallery::ViewEnv {
            i18n: ctx.i18n,
            orientation: ctx.orientation,
        })
        .map(Message::Gallery)
}
