// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navbar, the
//! current screen and the footer.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, component};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::pages;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub gallery: Option<&'a component::State>,
    /// i18n key of the startup warning, if still shown.
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => pages::home::view(ctx.i18n),
        Screen::About => pages::about::view(ctx.i18n),
        Screen::Projects => pages::projects::view(ctx.i18n),
        Screen::Experiences => pages::experiences::view(ctx.i18n),
        Screen::Certificates => view_certificates(ctx.i18n, ctx.gallery),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill).push(navbar);

    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }

    column
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer(ctx.i18n))
        .into()
}

fn view_certificates<'a>(
    i18n: &'a I18n,
    gallery: Option<&'a component::State>,
) -> Element<'a, Message> {
    match gallery {
        Some(state) => gallery::view(gallery::ViewContext { i18n, state }).map(Message::Gallery),
        None => Container::new(Text::new(i18n.tr("gallery-unavailable")))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    }
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(Text::new("✕").size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected)
        .on_press(Message::DismissWarning);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(i18n.tr(key))
                    .size(typography::BODY)
                    .color(palette::PRIMARY_700),
            )
            .push(Space::new().width(Length::Fill))
            .push(dismiss),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::LG])
    .style(styles::container::badge)
    .into()
}

fn footer<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("footer-copyright").to_uppercase()).size(typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .into()
}
