// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::Deserialize;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,

    /// Outer border of the artwork frame.
    pub frame_border: Color,
    /// Matting between the frame and the artwork.
    pub frame_matting: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::GRAY_50,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            frame_border: palette::WALNUT,
            frame_matting: palette::IVORY,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            frame_border: palette::GRAY_400,
            frame_matting: palette::GRAY_100,
        }
    }

    /// Picks the scheme matching an Iced theme by its background luminance.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let bg = theme.extended_palette().background.base.color;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Returns the Iced theme used to render the application.
    #[must_use]
    pub fn to_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
