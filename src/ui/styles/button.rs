// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the Previous/Next buttons: white background, black label.
pub fn navigation(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Active => (WHITE, palette::GRAY_200, shadow::SM),
        button::Status::Hovered => (palette::GRAY_50, palette::GRAY_400, shadow::SM),
        button::Status::Pressed => (palette::GRAY_100, palette::GRAY_400, shadow::NONE),
        button::Status::Disabled => (palette::GRAY_100, palette::GRAY_200, shadow::NONE),
    };
    let text_color = if status == button::Status::Disabled {
        palette::GRAY_400
    } else {
        BLACK
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_button_is_white_with_black_label() {
        let style = navigation(&Theme::Dark, button::Status::Active);

        assert_eq!(style.background, Some(Background::Color(WHITE)));
        assert_eq!(style.text_color, BLACK);
    }

    #[test]
    fn navigation_button_keeps_light_look_in_both_themes() {
        let light = navigation(&Theme::Light, button::Status::Active);
        let dark = navigation(&Theme::Dark, button::Status::Active);
        assert_eq!(light.background, dark.background);
    }

    #[test]
    fn navigation_button_background_changes_on_hover() {
        let normal = navigation(&Theme::Light, button::Status::Active);
        let hover = navigation(&Theme::Light, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }
}
