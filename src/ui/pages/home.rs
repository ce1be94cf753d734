// SPDX-License-Identifier: MPL-2.0
//! Landing page: name, roles and headline figures.

use super::page;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::Element;

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let intro = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("home-greeting")).size(typography::TITLE_MD))
        .push(Text::new(content::OWNER_NAME).size(typography::DISPLAY))
        .push(
            Text::new(content::ROLES.join(" · "))
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_500),
        );

    let stats = content::STATS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, (label, value)| {
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(*value).size(typography::TITLE_MD))
                        .push(Text::new(label.to_uppercase()).size(typography::CAPTION)),
                )
                .padding(spacing::MD)
                .style(styles::container::panel),
            )
        });

    let profiles = content::PROFILES.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("home-profiles-heading")).size(typography::TITLE_SM)),
        |column, (label, url)| {
            column.push(Text::new(format!("{label}: {url}")).size(typography::BODY))
        },
    );

    page(Column::new().push(intro).push(stats).push(profiles))
}
