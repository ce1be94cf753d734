// SPDX-License-Identifier: MPL-2.0
//! Project cards with tags and links.

use super::{heading, page};
use crate::content::{Project, PROJECTS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let body = PROJECTS.iter().fold(
        Column::new().push(heading(
            i18n.tr("projects-title"),
            i18n.tr("projects-subtitle"),
        )),
        |column, project| column.push(project_card(i18n, project)),
    );

    page(body)
}

fn project_card<'a, Message: 'a>(i18n: &I18n, project: &Project) -> Element<'a, Message> {
    let tags = project.tags.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, tag| {
            row.push(
                Container::new(Text::new(*tag).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::badge),
            )
        },
    );

    let mut card = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(project.name).size(typography::TITLE_MD))
        .push(Text::new(project.description).size(typography::BODY))
        .push(tags);

    if let Some(url) = project.source_url {
        card = card.push(
            Text::new(i18n.tr_with_args("projects-source", &[("url", url)])).size(typography::CAPTION),
        );
    }
    if let Some(url) = project.live_url {
        card = card.push(
            Text::new(i18n.tr_with_args("projects-live", &[("url", url)])).size(typography::CAPTION),
        );
    }

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel)
        .into()
}
