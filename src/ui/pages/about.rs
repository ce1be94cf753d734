// SPDX-License-Identifier: MPL-2.0
//! About page: an overview paragraph and the skill groups.
//!
//! Skills are shown by name. There are no logo assets, so each skill gets the
//! same labelled chip a missing logo would fall back to.

use super::page;
use crate::content::{SkillGroup, OVERVIEW, SKILL_GROUPS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{rule, Column, Container, Row, Text},
    Element, Length,
};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let intro = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr("about-eyebrow").to_uppercase())
                .size(typography::CAPTION)
                .color(palette::PRIMARY_500),
        )
        .push(Text::new(i18n.tr("about-title")).size(typography::DISPLAY));

    let overview = OVERVIEW.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, paragraph| column.push(Text::new(*paragraph).size(typography::BODY_LG)),
    );

    let skills = SKILL_GROUPS.iter().fold(
        Column::new().spacing(spacing::LG),
        |column, group| column.push(build_section(group)),
    );

    page(Column::new().push(intro).push(overview).push(skills))
}

/// Build one skill group: title, divider, then a row of chips.
fn build_section<'a, Message: 'a>(group: &SkillGroup) -> Element<'a, Message> {
    let header = Text::new(group.title.to_uppercase()).size(typography::TITLE_SM);

    let chips = group.skills.iter().fold(
        Row::new().spacing(spacing::SM).align_y(Vertical::Center),
        |row, skill| {
            row.push(
                Container::new(Text::new(*skill).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::badge),
            )
        },
    );

    let inner = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(rule::horizontal(1))
        .push(chips);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_page_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }

    #[test]
    fn every_skill_group_renders() {
        for group in SKILL_GROUPS {
            let _element: Element<'_, ()> = build_section(group);
        }
    }
}
