// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard and window events to application messages.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

/// Listens for window geometry changes and the arrow-key navigation shortcuts.
///
/// Window events are always forwarded. Key presses are only forwarded when no
/// widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window_event) => window_message(&window_event),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => navigation_for_key(&key).map(Message::Gallery),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Maps a window event to the message carrying its new inner size.
///
/// The opening size counts too: it may differ from the requested one.
pub fn window_message(event: &window::Event) -> Option<Message> {
    match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => {
            Some(Message::WindowResized(*size))
        }
        _ => None,
    }
}

/// Maps a pressed key to a gallery navigation message.
pub fn navigation_for_key(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        _ => None,
    }
}
