// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Writes theme and language preferences back to `settings.toml`.

use super::Message;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// inspecting the in-memory config instead.
pub fn persist_preferences(config: &Config) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    if let Err(error) = config::save(config) {
        log::error!("Failed to save config: {}", error);
    }

    Task::none()
}

/// Switches to `theme_mode` and persists it.
pub fn apply_theme_change(
    config: &mut Config,
    current: &mut ThemeMode,
    theme_mode: ThemeMode,
) -> Task<Message> {
    *current = theme_mode;
    config.general.theme_mode = theme_mode;
    log::debug!("Theme switched to {:?}", theme_mode);
    persist_preferences(config)
}

/// Applies the newly selected locale and persists it.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) -> Task<Message> {
    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    log::debug!("Locale switched to {}", locale);
    persist_preferences(config)
}

/// The locale after the current one, wrapping around.
#[must_use]
pub fn next_locale(i18n: &I18n) -> Option<LanguageIdentifier> {
    let locales = &i18n.available_locales;
    let position = locales
        .iter()
        .position(|locale| locale == i18n.current_locale())?;
    locales.get((position + 1) % locales.len()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_change_updates_config() {
        let mut config = Config::default();
        let mut current = ThemeMode::System;
        let _task = apply_theme_change(&mut config, &mut current, ThemeMode::Light);
        assert_eq!(current, ThemeMode::Light);
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn language_change_updates_config_and_bundle() {
        let mut config = Config::default();
        let mut i18n = I18n::new(Some("en-US".into()), &config);
        let _task = apply_language_change(&mut i18n, &mut config, "fr".parse().unwrap());
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(i18n.tr("navbar-home"), "Accueil");
    }

    #[test]
    fn next_locale_wraps_around() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        let next = next_locale(&i18n).expect("two locales ship");
        assert_eq!(next, "fr".parse::<LanguageIdentifier>().unwrap());

        let i18n = I18n::new(Some("fr".into()), &Config::default());
        let next = next_locale(&i18n).expect("two locales ship");
        assert_eq!(next, "en-US".parse::<LanguageIdentifier>().unwrap());
    }
}
