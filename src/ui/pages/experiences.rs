// SPDX-License-Identifier: MPL-2.0
//! Work history as a vertical timeline.

use super::{heading, page};
use crate::content::{Experience, EXPERIENCES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let body = EXPERIENCES.iter().fold(
        Column::new().push(heading(
            i18n.tr("experiences-title"),
            i18n.tr("experiences-subtitle"),
        )),
        |column, experience| column.push(entry(experience)),
    );

    page(body)
}

fn entry<'a, Message: 'a>(experience: &Experience) -> Element<'a, Message> {
    let points = experience.points.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, point| column.push(Text::new(format!("• {point}")).size(typography::BODY)),
    );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(experience.period).size(typography::CAPTION))
            .push(Text::new(experience.title).size(typography::TITLE_MD))
            .push(
                Text::new(experience.company)
                    .size(typography::BODY_LG)
                    .color(palette::PRIMARY_500),
            )
            .push(points),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
