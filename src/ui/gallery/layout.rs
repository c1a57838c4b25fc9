// SPDX-License-Identifier: MPL-2.0
//! Pure layout of the gallery screen.
//!
//! [`render`] maps an artwork index and an orientation to a [`GalleryLayout`]
//! describing what is shown and how it is arranged, without touching Iced
//! widgets or translations. The view module turns that tree into widgets.

use super::component::Message;
use crate::domain::gallery::{lookup, ArtworkIndex, Orientation};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use iced::Padding;

/// How the image panel and the text panel are placed relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Image, text and buttons stacked top to bottom.
    Stacked,
    /// Image on the left, text and buttons stacked on the right.
    SideBySide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePanel {
    pub asset: &'static str,
    pub description_key: &'static str,
    pub size: f32,
    pub matting: f32,
    pub frame_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLine {
    pub key: &'static str,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavButton {
    pub label_key: &'static str,
    pub action: Message,
    /// Outer spacing around the button inside its half of the row.
    pub insets: Padding,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryLayout {
    pub arrangement: Arrangement,
    pub image: ImagePanel,
    pub title: TextLine,
    pub caption: TextLine,
    pub previous: NavButton,
    pub next: NavButton,
}

/// Orientation-independent part of a layout: what is shown, not where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content {
    pub asset: &'static str,
    pub description_key: &'static str,
    pub title_key: &'static str,
    pub caption_key: &'static str,
    pub buttons: [(&'static str, Message); 2],
}

impl GalleryLayout {
    #[must_use]
    pub fn content(&self) -> Content {
        Content {
            asset: self.image.asset,
            description_key: self.image.description_key,
            title_key: self.title.key,
            caption_key: self.caption.key,
            buttons: [
                (self.previous.label_key, self.previous.action),
                (self.next.label_key, self.next.action),
            ],
        }
    }
}

/// Builds the layout for the artwork at `index` in the given orientation.
#[must_use]
pub fn render(index: ArtworkIndex, orientation: Orientation) -> GalleryLayout {
    let artwork = lookup(index);

    let (arrangement, previous_insets, next_insets) = match orientation {
        Orientation::Portrait => (
            Arrangement::Stacked,
            Padding {
                top: spacing::MD,
                right: spacing::BUTTON_GUTTER,
                bottom: 0.0,
                left: spacing::MD,
            },
            Padding {
                top: spacing::MD,
                right: spacing::MD,
                bottom: 0.0,
                left: spacing::BUTTON_GUTTER,
            },
        ),
        Orientation::Landscape => (
            Arrangement::SideBySide,
            Padding {
                top: spacing::MD,
                ..Padding::ZERO
            },
            Padding {
                top: spacing::MD,
                right: spacing::MD,
                ..Padding::ZERO
            },
        ),
    };

    GalleryLayout {
        arrangement,
        image: ImagePanel {
            asset: artwork.image,
            description_key: artwork.description_key,
            size: sizing::ARTWORK,
            matting: sizing::ARTWORK_MATTING,
            frame_width: border::WIDTH_FRAME,
        },
        title: TextLine {
            key: artwork.title_key,
            size: typography::ARTWORK_TITLE,
        },
        caption: TextLine {
            key: artwork.artist_year_key,
            size: typography::ARTWORK_CAPTION,
        },
        previous: NavButton {
            label_key: "button-previous",
            action: Message::Previous,
            insets: previous_insets,
        },
        next: NavButton {
            label_key: "button-next",
            action: Message::Next,
            insets: next_insets,
        },
    }
}
