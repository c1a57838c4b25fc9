// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery screen.
//!
//! The `App` struct wires together the gallery component, localization and
//! settings, and decides the layout orientation at this boundary so the
//! gallery renderer never queries the window itself.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::navigation_for_key;

use crate::config::{self, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::gallery::{Orientation, OrientationPreference};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the gallery, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    orientation_preference: OrientationPreference,
    /// Orientation resolved from the preference and the last window size.
    orientation: Orientation,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("artwork", &self.gallery.current())
            .field("orientation", &self.orientation)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot closure to be Fn; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let window_size = Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        let orientation_preference = OrientationPreference::default();
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(),
            theme_mode: ThemeMode::System,
            orientation_preference,
            orientation: orientation_preference.resolve(window_size.width, window_size.height),
            window_size,
        }
    }
}

impl App {
    /// Initializes application state from the config file and the `Flags`
    /// received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_error) = config::load();
        if let Some(err) = config_error {
            log::warn!("Using default settings: {err}");
        }

        (Self::with_config(flags.lang, flags.orientation, &config), Task::none())
    }

    /// Builds the application from an already loaded config.
    fn with_config(
        lang: Option<String>,
        orientation: Option<OrientationPreference>,
        config: &config::Config,
    ) -> Self {
        let i18n = I18n::new(lang, config);
        let orientation_preference = orientation.unwrap_or(config.display.orientation);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            orientation_preference,
            ..Self::default()
        };
        app.orientation =
            orientation_preference.resolve(app.window_size.width, app.window_size.height);

        log::info!(
            "Starting with locale {}, orientation {:?} ({:?})",
            app.i18n.current_locale(),
            app.orientation,
            app.orientation_preference
        );

        app
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let artwork_title = self.i18n.tr(self.gallery.artwork().title_key);
        format!("{artwork_title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            window_size: &mut self.window_size,
            orientation: &mut self.orientation,
            orientation_preference: self.orientation_preference,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            orientation: self.orientation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ArtworkIndex;

    fn english_app() -> App {
        App::with_config(Some("en-US".to_string()), None, &config::Config::default())
    }

    #[test]
    fn default_app_starts_on_first_artwork_in_portrait() {
        let app = App::default();
        assert_eq!(app.gallery.current(), ArtworkIndex::FIRST);
        assert_eq!(app.orientation, Orientation::Portrait);
    }

    #[test]
    fn title_shows_current_artwork() {
        let mut app = english_app();
        let first_title = app.title();
        assert!(first_title.ends_with(" - Art Space"));
        assert!(!first_title.contains("MISSING"));

        let _ = app.update(Message::Gallery(gallery::Message::Next));
        assert_ne!(app.title(), first_title);
    }

    #[test]
    fn gallery_messages_wrap_around() {
        let mut app = english_app();

        let _ = app.update(Message::Gallery(gallery::Message::Previous));
        assert_eq!(app.gallery.current(), ArtworkIndex::LAST);

        let _ = app.update(Message::Gallery(gallery::Message::Next));
        assert_eq!(app.gallery.current(), ArtworkIndex::FIRST);
    }

    #[test]
    fn resize_switches_orientation_in_auto_mode() {
        let mut app = english_app();
        assert_eq!(app.orientation, Orientation::Portrait);

        let _ = app.update(Message::WindowResized(Size::new(1024.0, 600.0)));
        assert_eq!(app.orientation, Orientation::Landscape);
        assert_eq!(app.window_size, Size::new(1024.0, 600.0));

        let _ = app.update(Message::WindowResized(Size::new(400.0, 800.0)));
        assert_eq!(app.orientation, Orientation::Portrait);
    }

    #[test]
    fn resize_keeps_forced_orientation() {
        let mut app = App::with_config(
            Some("en-US".to_string()),
            Some(OrientationPreference::Portrait),
            &config::Config::default(),
        );

        let _ = app.update(Message::WindowResized(Size::new(1024.0, 600.0)));
        assert_eq!(app.orientation, Orientation::Portrait);
    }

    #[test]
    fn cli_orientation_overrides_config() {
        let mut config = config::Config::default();
        config.display.orientation = OrientationPreference::Portrait;

        let app = App::with_config(None, Some(OrientationPreference::Landscape), &config);
        assert_eq!(app.orientation, Orientation::Landscape);
    }

    #[test]
    fn config_orientation_applies_at_startup() {
        let mut config = config::Config::default();
        config.display.orientation = OrientationPreference::Landscape;

        let app = App::with_config(None, None, &config);
        assert_eq!(app.orientation_preference, OrientationPreference::Landscape);
        assert_eq!(app.orientation, Orientation::Landscape);
    }

    #[test]
    fn theme_follows_config() {
        let mut config = config::Config::default();
        config.general.theme_mode = ThemeMode::Light;

        let app = App::with_config(None, None, &config);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn orientation_change_keeps_artwork() {
        let mut app = english_app();
        let _ = app.update(Message::Gallery(gallery::Message::Next));
        let before = app.gallery.current();

        let _ = app.update(Message::WindowResized(Size::new(1024.0, 600.0)));
        assert_eq!(app.gallery.current(), before);
    }
}
