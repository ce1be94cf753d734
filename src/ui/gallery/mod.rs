// SPDX-License-Identifier: MPL-2.0
//! Certificate gallery: incrementally revealed cards plus a fullscreen preview.

pub mod component;
pub mod subcomponents;

use self::component::{Message, State};
use self::subcomponents::disclosure::DisclosureState;
use self::subcomponents::preview;
use crate::catalog::CatalogItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{scroll_guard, AnimatedSpinner};
use iced::widget::{
    button, mouse_area, opaque, scrollable, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext { i18n, state } = ctx;
    let disclosure = state.disclosure();

    let page = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(header(i18n, disclosure.count()))
        .push(grid(i18n, disclosure.visible()))
        .push(expand_control(
            i18n,
            disclosure.state(),
            state.spinner_rotation(),
        ));

    let locked = state.preview().resources().is_scroll_locked();
    let base: Element<'_, Message> = scroll_guard(
        scrollable(page).width(Length::Fill).height(Length::Fill),
        locked,
    )
    .into();

    match state.preview().binding() {
        Some(item) => Stack::new()
            .push(base)
            .push(preview_layer(i18n, item))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base,
    }
}

fn header<'a>(i18n: &I18n, count: usize) -> Element<'a, Message> {
    let intro = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(
            Text::new(i18n.tr("gallery-eyebrow").to_uppercase())
                .size(typography::CAPTION)
                .color(palette::PRIMARY_500),
        )
        .push(Text::new(i18n.tr("gallery-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("gallery-description")).size(typography::BODY_LG));

    let counter = Column::new()
        .align_x(alignment::Horizontal::Right)
        .push(Text::new(i18n.tr("gallery-count-label").to_uppercase()).size(typography::CAPTION))
        .push(Text::new(count.to_string()).size(typography::TITLE_LG));

    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Bottom)
        .push(intro)
        .push(counter)
        .into()
}

fn grid<'a>(i18n: &I18n, items: &[CatalogItem]) -> Element<'a, Message> {
    let rows = items
        .chunks(sizing::GRID_COLUMNS)
        .map(|chunk| -> Element<'a, Message> {
            chunk
                .iter()
                .fold(Row::new().spacing(spacing::LG), |row, item| {
                    row.push(card(i18n, item))
                })
                .into()
        });

    Column::with_children(rows)
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn card<'a>(i18n: &I18n, item: &CatalogItem) -> Element<'a, Message> {
    let image_slot = Container::new(
        Text::new(i18n.tr("gallery-card-expand").to_uppercase()).size(typography::CAPTION),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::image_slot);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(image_slot)
        .push(badge(item.category.to_uppercase()))
        .push(Text::new(item.title.clone()).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr_with_args("gallery-serial", &[("serial", item.serial().as_str())]))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    button(body)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::button::card)
        .on_press(Message::open(item.id))
        .into()
}

fn badge<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge)
        .into()
}

fn expand_control<'a>(
    i18n: &I18n,
    state: DisclosureState,
    rotation: f32,
) -> Element<'a, Message> {
    match state {
        DisclosureState::Exhausted => Text::new(i18n.tr("gallery-end").to_uppercase())
            .size(typography::CAPTION)
            .color(palette::ACCENT_500)
            .into(),
        DisclosureState::Loading => {
            // No on_press: the button renders disabled until the batch lands
            button(AnimatedSpinner::new(palette::WHITE, rotation).into_element())
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::XXL])
                .style(styles::button::primary)
                .into()
        }
        DisclosureState::Idle => button(
            Text::new(format!("{}  ▾", i18n.tr("gallery-expand").to_uppercase()))
                .size(typography::BODY),
        )
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::XL])
        .style(styles::button::primary)
        .on_press(Message::request_more())
        .into(),
    }
}

fn preview_layer<'a>(i18n: &I18n, item: &CatalogItem) -> Element<'a, Message> {
    let close = button(Text::new(format!("✕  {}", i18n.tr("preview-close"))))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Preview(preview::Message::CloseRequested));

    let close_row = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let image = Container::new(Text::new(item.image_ref.clone()).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_slot);

    let surface = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(image)
            .push(badge(item.category.to_uppercase()))
            .push(Text::new(item.title.clone()).size(typography::TITLE_MD))
            .push(Text::new(i18n.tr("preview-hint")).size(typography::CAPTION)),
    )
    .padding(spacing::LG)
    .max_width(sizing::PREVIEW_MAX_WIDTH)
    .style(styles::overlay::surface);

    // Presses on the surface are swallowed so they never reach the backdrop
    let surface =
        opaque(mouse_area(surface).on_press(Message::Preview(preview::Message::SurfacePressed)));

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(close_row)
        .push(
            Container::new(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        );

    mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Preview(preview::Message::BackdropPressed))
    .into()
}
