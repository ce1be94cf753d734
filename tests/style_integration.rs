// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use folio::ui::styles::{button, container, overlay};
    use folio::ui::theming::{ColorScheme, ThemeMode};
    use iced::Theme;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;
        let status = iced::widget::button::Status::Active;

        let _ = button::primary(&theme, status);
        let _ = button::card(&theme, status);
        let _ = button::selected(&theme, status);
        let _ = button::unselected(&theme, status);
        let close = button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
        let _ = close(&theme, status);
    }

    #[test]
    fn all_container_styles_compile() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = container::panel(&theme);
            let _ = container::image_slot(&theme);
            let _ = container::badge(&theme);
            let _ = container::navbar(&theme);
            let _ = overlay::backdrop(&theme);
            let _ = overlay::surface(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::BACKDROP;
        let _ = sizing::CARD_WIDTH;
    }

    #[test]
    fn preview_fits_inside_default_window() {
        assert!(sizing::PREVIEW_MAX_WIDTH <= folio::app::WINDOW_DEFAULT_WIDTH as f32);
        assert!(
            sizing::CARD_WIDTH * sizing::GRID_COLUMNS as f32
                <= folio::app::WINDOW_DEFAULT_WIDTH as f32
        );
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_mode(ThemeMode::Light);
        let dark = ColorScheme::for_mode(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn scheme_from_iced_theme_matches_mode() {
        let from_theme = ColorScheme::for_theme(&Theme::Dark);
        let from_mode = ColorScheme::for_mode(ThemeMode::Dark);
        assert_eq!(from_theme.surface_primary, from_mode.surface_primary);
    }
}
