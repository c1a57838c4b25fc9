// SPDX-License-Identifier: MPL-2.0
//! Turns a [`GalleryLayout`] into Iced widgets.

use super::assets;
use super::component::Message;
use super::layout::{Arrangement, GalleryLayout, ImagePanel, NavButton, TextLine};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, svg::Svg, tooltip, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

/// Renders the gallery screen described by `layout`.
pub fn view<'a>(layout: GalleryLayout, i18n: &I18n) -> Element<'a, Message> {
    let image = image_panel(&layout.image, i18n);
    let title = text_line(&layout.title, i18n);
    let caption = Text::new(i18n.tr(layout.caption.key))
        .size(layout.caption.size)
        .style(styles::text::caption);
    let buttons = Row::new()
        .width(Length::Fill)
        .push(nav_button(&layout.previous, i18n))
        .push(nav_button(&layout.next, i18n));

    let content: Element<'a, Message> = match layout.arrangement {
        Arrangement::Stacked => Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .spacing(spacing::XS)
            .padding(spacing::MD)
            .push(image)
            .push(title)
            .push(caption)
            .push(buttons)
            .into(),
        Arrangement::SideBySide => {
            let text_panel = Column::new()
                .width(Length::Fill)
                .spacing(spacing::XS)
                .push(title)
                .push(caption)
                .push(buttons);

            Row::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Center)
                .spacing(spacing::LG)
                .padding(spacing::MD)
                .push(image)
                .push(text_panel)
                .into()
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen)
        .into()
}

fn image_panel<'a>(panel: &ImagePanel, i18n: &I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match assets::artwork_handle(panel.asset) {
        Some(handle) => Svg::new(handle)
            .width(Length::Fixed(panel.size))
            .height(Length::Fixed(panel.size))
            .content_fit(ContentFit::Contain)
            .into(),
        None => {
            log::error!("Artwork asset {} is missing from the bundle", panel.asset);
            // Show the description in place of the image
            Container::new(Text::new(i18n.tr(panel.description_key)).center())
                .width(Length::Fixed(panel.size))
                .height(Length::Fixed(panel.size))
                .padding(spacing::MD)
                .into()
        }
    };

    let framed = Container::new(picture)
        .padding(panel.matting + panel.frame_width)
        .style(styles::container::artwork_frame);

    styles::tooltip::described(
        framed,
        i18n.tr(panel.description_key),
        tooltip::Position::Bottom,
    )
    .into()
}

fn text_line<'a>(line: &TextLine, i18n: &I18n) -> Element<'a, Message> {
    Text::new(i18n.tr(line.key)).size(line.size).into()
}

fn nav_button<'a>(nav: &NavButton, i18n: &I18n) -> Element<'a, Message> {
    let label = Text::new(i18n.tr(nav.label_key))
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .center();

    let pressable = button(label)
        .on_press(nav.action)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::navigation);

    Container::new(pressable)
        .padding(nav.insets)
        .width(Length::FillPortion(1))
        .into()
}
