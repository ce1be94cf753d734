// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every screen.
//!
//! Holds one entry per screen, the language switch and the light/dark toggle.

use crate::app::Screen;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    CycleLanguage,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    CycleLanguage,
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Navigate(target) if target == current => Event::None,
        Message::Navigate(target) => Event::Navigate(target),
        Message::CycleLanguage => Event::CycleLanguage,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(content::OWNER_NAME.to_uppercase()).size(typography::TITLE_SM);

    let entries = Screen::ALL.into_iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |row, screen| {
            let style = if screen == ctx.current {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(ctx.i18n.tr(screen.label_key())).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(style)
                    .on_press(Message::Navigate(screen)),
            )
        },
    );

    let toggle_key = if ctx.theme_mode.is_dark() {
        "navbar-theme-to-light"
    } else {
        "navbar-theme-to-dark"
    };
    let toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::ToggleTheme);

    let language = button(
        Text::new(ctx.i18n.current_locale().language.as_str().to_uppercase())
            .size(typography::BODY),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::unselected)
    .on_press(Message::CycleLanguage);

    let bar = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(entries)
        .push(language)
        .push(toggle);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}
