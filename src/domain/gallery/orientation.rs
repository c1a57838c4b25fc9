// SPDX-License-Identifier: MPL-2.0
//! Layout orientation.
//!
//! The orientation is decided once by the application shell, either from the
//! user preference or from the window size, and then handed to the renderer.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Layout mode used by the gallery renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Derives the orientation of a surface: landscape when strictly wider than tall.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// User preference for the orientation, stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationPreference {
    /// Follow the window shape.
    #[default]
    Auto,
    Portrait,
    Landscape,
}

impl OrientationPreference {
    /// Resolves the effective orientation for a window of the given size.
    #[must_use]
    pub fn resolve(self, width: f32, height: f32) -> Orientation {
        match self {
            OrientationPreference::Auto => Orientation::from_size(width, height),
            OrientationPreference::Portrait => Orientation::Portrait,
            OrientationPreference::Landscape => Orientation::Landscape,
        }
    }
}

/// Error returned when parsing an unknown orientation name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOrientationError(String);

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid orientation '{}' (expected auto, portrait or landscape)",
            self.0
        )
    }
}

impl std::error::Error for ParseOrientationError {}

impl FromStr for OrientationPreference {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(OrientationPreference::Auto),
            "portrait" => Ok(OrientationPreference::Portrait),
            "landscape" => Ok(OrientationPreference::Landscape),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_than_tall_is_landscape() {
        assert_eq!(Orientation::from_size(800.0, 600.0), Orientation::Landscape);
        assert_eq!(Orientation::from_size(400.0, 760.0), Orientation::Portrait);
    }

    #[test]
    fn square_window_is_portrait() {
        assert_eq!(Orientation::from_size(500.0, 500.0), Orientation::Portrait);
    }

    #[test]
    fn forced_preference_ignores_window_size() {
        assert_eq!(
            OrientationPreference::Portrait.resolve(1200.0, 300.0),
            Orientation::Portrait
        );
        assert_eq!(
            OrientationPreference::Landscape.resolve(300.0, 1200.0),
            Orientation::Landscape
        );
    }

    #[test]
    fn auto_preference_follows_window_size() {
        assert_eq!(
            OrientationPreference::Auto.resolve(1200.0, 300.0),
            Orientation::Landscape
        );
        assert_eq!(
            OrientationPreference::Auto.resolve(300.0, 1200.0),
            Orientation::Portrait
        );
    }

    #[test]
    fn preference_parses_case_insensitively() {
        assert_eq!(
            "Landscape".parse::<OrientationPreference>(),
            Ok(OrientationPreference::Landscape)
        );
        assert_eq!(
            "auto".parse::<OrientationPreference>(),
            Ok(OrientationPreference::Auto)
        );
        assert!("sideways".parse::<OrientationPreference>().is_err());
    }
}
