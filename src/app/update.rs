// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The certificates screen owns its gallery state: switching to it builds a
//! fresh [`component::State`], switching away drops it, which releases any
//! page resources the preview still holds.

use super::{persistence, Message, Screen};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::component;
use crate::ui::gallery::subcomponents::preview::PageResources;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub resources: &'a PageResources,
    pub gallery: &'a mut Option<component::State>,
    pub warning: &'a mut Option<String>,
}

/// Handles navbar messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(target) => {
            switch_screen(ctx, target);
            Task::none()
        }
        NavbarEvent::CycleLanguage => match persistence::next_locale(ctx.i18n) {
            Some(locale) => persistence::apply_language_change(ctx.i18n, ctx.config, locale),
            None => Task::none(),
        },
        NavbarEvent::ToggleTheme => {
            let next = ctx.theme_mode.toggled();
            persistence::apply_theme_change(ctx.config, ctx.theme_mode, next)
        }
    }
}

/// Forwards a message to the gallery, if it is still mounted.
///
/// Timers started by a gallery that has since been dropped still deliver
/// their message; with no gallery to receive it, it is discarded here.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    match ctx.gallery.as_mut() {
        Some(gallery) => gallery.handle(message).map(Message::Gallery),
        None => {
            log::trace!("Gallery message with no gallery mounted: {:?}", message);
            Task::none()
        }
    }
}

/// Switches the active screen, mounting or unmounting the gallery.
pub fn switch_screen(ctx: &mut UpdateContext<'_>, target: Screen) {
    *ctx.screen = target;
    *ctx.gallery = if target == Screen::Certificates {
        mount_gallery(ctx.resources, ctx.config)
    } else {
        None
    };
}

/// Builds the gallery state for the certificates screen.
///
/// A failure is logged and leaves the screen showing a fallback message.
pub fn mount_gallery(resources: &PageResources, config: &Config) -> Option<component::State> {
    match component::State::new(resources.clone(), &config.gallery) {
        Ok(state) => Some(state),
        Err(error) => {
            log::error!("Failed to build certificate gallery: {}", error);
            None
        }
    }
}
