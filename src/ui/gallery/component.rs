// SPDX-License-Identifier: MPL-2.0
//! Gallery component state and update logic.
//!
//! The component owns the current artwork index. It only changes through
//! [`State::update`], which applies the wrapping Previous/Next transitions
//! and reports the new artwork to the parent.

use super::layout::{self, GalleryLayout};
use super::view;
use crate::domain::gallery::{lookup, Artwork, ArtworkIndex, Orientation};
use crate::i18n::fluent::I18n;
use iced::Element;

/// Messages emitted by the gallery widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ArtworkChanged(ArtworkIndex),
}

/// Environment needed to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub orientation: Orientation,
}

/// Gallery state, created on the first artwork.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    current: ArtworkIndex,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> ArtworkIndex {
        self.current
    }

    /// Artwork currently on display.
    #[must_use]
    pub fn artwork(&self) -> &'static Artwork {
        lookup(self.current)
    }

    /// State after moving to the next artwork.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            current: self.current.next(),
        }
    }

    /// State after moving to the previous artwork.
    #[must_use]
    pub fn previous(self) -> Self {
        Self {
            current: self.current.previous(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        *self = match message {
            Message::Previous => self.previous(),
            Message::Next => self.next(),
        };
        Event::ArtworkChanged(self.current)
    }

    #[must_use]
    pub fn layout(&self, orientation: Orientation) -> GalleryLayout {
        layout::render(self.current, orientation)
    }

    pub fn view<'a>(&self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self.layout(env.orientation), env.i18n)
    }
}
