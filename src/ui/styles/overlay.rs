// SPDX-License-Identifier: MPL-2.0
//! Styles for the full-screen certificate preview.

use crate::ui::design_tokens::{
    border, opacity,
    palette::WHITE,
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer covering the whole page while the preview is open.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        text_color: Some(colors.overlay_text),
        ..Default::default()
    }
}

/// Card holding the enlarged image and its caption.
pub fn surface(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.r, 0.0);
                assert!(color.a > 0.5 && color.a < 1.0);
            }
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn surface_follows_theme_background() {
        let light = surface(&Theme::Light);
        let dark = surface(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
