// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Artist and year caption, softer than the artwork title.
pub fn caption(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_uses_secondary_text_color() {
        for theme in [Theme::Light, Theme::Dark] {
            let colors = ColorScheme::for_theme(&theme);
            assert_eq!(caption(&theme).color, Some(colors.text_secondary));
            assert_ne!(colors.text_secondary, colors.text_primary);
        }
    }
}
