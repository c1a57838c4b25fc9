// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use art_space::ui::design_tokens::{palette, sizing, spacing, typography};
    use art_space::ui::styles::{button, container, tooltip};
    use art_space::ui::theming::{ColorScheme, ThemeMode};
    use iced::widget::button::Status;
    use iced::{Background, Theme};

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [
                Status::Active,
                Status::Hovered,
                Status::Pressed,
                Status::Disabled,
            ] {
                let _ = button::navigation(&theme, status);
            }
            let _ = container::artwork_frame(&theme);
            let _ = container::screen(&theme);
            let _ = tooltip::tooltip_container(&theme);
        }
    }

    #[test]
    fn navigation_buttons_stay_white() {
        let style = button::navigation(&Theme::Dark, Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::WHITE)));
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::IVORY;
        let _ = spacing::BUTTON_GUTTER;
        let _ = sizing::ARTWORK;
        assert!(typography::ARTWORK_TITLE > typography::ARTWORK_CAPTION);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_theme(&ThemeMode::Light.to_theme());
        let dark = ColorScheme::for_theme(&ThemeMode::Dark.to_theme());

        assert!(light.surface.r > dark.surface.r);
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}
