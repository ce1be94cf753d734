// SPDX-License-Identifier: MPL-2.0
//! Static portfolio pages. They render content only and emit no messages.

pub mod about;
pub mod experiences;
pub mod home;
pub mod projects;

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{scrollable, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Title block shared by the list pages.
fn heading<'a, Message: 'a>(title: String, subtitle: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(Text::new(subtitle).size(typography::BODY_LG))
        .into()
}

/// Scrollable, centered page body.
fn page<'a, Message: 'a>(body: Column<'a, Message>) -> Element<'a, Message> {
    scrollable(
        Container::new(body.spacing(spacing::XL).padding(spacing::XL).max_width(sizing::PAGE_MAX_WIDTH))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
