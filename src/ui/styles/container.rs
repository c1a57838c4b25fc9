// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Picture frame around the artwork image.
///
/// The matting fills the padding between the border and the image; both
/// colors follow the light/dark variant of the active theme.
pub fn artwork_frame(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.frame_matting)),
        border: Border {
            color: colors.frame_border,
            width: border::WIDTH_FRAME,
            radius: radius::SM.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Full-window background behind the gallery.
pub fn screen(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}
