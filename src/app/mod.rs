// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio screens.
//!
//! The `App` struct wires together localization, persisted preferences and
//! the certificate gallery, and owns the page resources the gallery preview
//! borrows while open.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::component;
use crate::ui::gallery::subcomponents::preview::PageResources;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Last loaded or saved configuration; saved whole on every change.
    config: Config,
    /// Scroll lock and dismiss listener registry for the current page.
    resources: PageResources,
    /// Present only while the certificates screen is shown.
    gallery: Option<component::State>,
    /// i18n key of a startup warning.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("gallery_mounted", &self.gallery.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1180;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are only consumed once
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
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            theme_mode: ThemeMode::System,
            config: Config::default(),
            resources: PageResources::new(),
            gallery: None,
            warning: None,
        }
    }
}

impl App {
    /// Initializes application state from the persisted config and the CLI
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            warning,
            ..Self::default()
        };

        let screen = flags.screen.unwrap_or_default();
        app.screen = screen;
        if screen == Screen::Certificates {
            app.gallery = update::mount_gallery(&app.resources, &app.config);
        }

        log::debug!("Starting on {:?} screen", app.screen);
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.screen == Screen::Home {
            app_name
        } else {
            format!("{} - {app_name}", self.i18n.tr(self.screen.label_key()))
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let dismiss_sub = subscription::create_dismiss_subscription(&self.resources);
        let gallery_sub = subscription::create_gallery_subscription(self.gallery.as_ref());

        Subscription::batch([dismiss_sub, gallery_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            resources: &self.resources,
            gallery: &mut self.gallery,
            warning: &mut self.warning,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::DismissWarning => {
                *ctx.warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            gallery: self.gallery.as_ref(),
            warning: self.warning.as_deref(),
        })
    }
}
