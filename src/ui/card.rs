// SPDX-License-Identifier: MPL-2.0
//! The term and its description, centered below the header.
//!
//! The term behaves like a link and searches as soon as it is pressed. The
//! rest of the text block is one pointer region whose presses are never
//! forwarded to the text, so nothing can be selected; the app classifies each
//! press/release pair there and searches for the term on a tap.

use crate::content::Term;
use crate::layout::FontMetrics;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::theme::Palette;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{container, mouse_area, Column, Text};
use iced::{mouse, Element, Font, Length, Point};

pub struct ViewContext<'a> {
    pub term: &'a Term,
    pub palette: Palette,
    pub fonts: FontMetrics,
    pub term_hovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    TermHovered(bool),
    TermPressed,
    /// Pointer position relative to the text block.
    PointerMoved(Point),
    Pressed,
    Released,
    PointerLeft,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let term_color = if ctx.term_hovered {
        palette::HOVER_LINK
    } else {
        ctx.palette.text
    };

    let term = Text::new(ctx.term.term.as_str())
        .size(ctx.fonts.term_size)
        .font(Font {
            weight: Weight::Bold,
            ..Font::default()
        })
        .color(term_color)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let term = mouse_area(term)
        .on_press(Message::TermPressed)
        .on_enter(Message::TermHovered(true))
        .on_exit(Message::TermHovered(false))
        .interaction(mouse::Interaction::Pointer);

    let description = Text::new(ctx.term.description.as_str())
        .size(ctx.fonts.description_size)
        .color(ctx.palette.text)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let block = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(term)
        .push(description);

    let block = mouse_area(block)
        .on_move(Message::PointerMoved)
        .on_press(Message::Pressed)
        .on_release(Message::Released)
        .on_exit(Message::PointerLeft);

    container(block)
        .padding(spacing::LG)
        .center(Length::Fill)
        .into()
}
