// SPDX-License-Identifier: MPL-2.0
//! Composes the component views into the window layout.
//!
//! ```text
//! +-----------+-----------------------------+
//! |           | ⚙ ⏸                       ✕ |
//! |  drawer   |                             |
//! | (when     |            term             |
//! |  open)    |         description         |
//! |           |                           ⇲ |
//! +-----------+-----------------------------+
//! ```

use super::{App, Message};
use crate::content::Term;
use crate::rotation::Mode;
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::feedback::FlashTarget;
use crate::ui::{card, drawer, header, styles};
use iced::widget::{container, mouse_area, Column, Row, Space, Text};
use iced::{mouse, Element, Length};

pub const GRIP_GLYPH: &str = "⇲";

/// Side-by-side panes of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Drawer,
    Content,
}

/// Panes from left to right. The drawer opens on the left edge.
#[must_use]
pub fn panes(drawer_open: bool) -> &'static [Pane] {
    if drawer_open {
        &[Pane::Drawer, Pane::Content]
    } else {
        &[Pane::Content]
    }
}

pub fn view(app: &App) -> Element<'_, Message> {
    let colors = app.session.config.theme_name.palette();

    let layout = panes(app.drawer_open)
        .iter()
        .fold(Row::new().height(Length::Fill), |row, pane| {
            row.push(match pane {
                Pane::Drawer => drawer_view(app),
                Pane::Content => content_view(app),
            })
        });

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface(colors.background, colors.text))
        .into()
}

fn content_view(app: &App) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        palette: app.session.config.theme_name.palette(),
        chrome: app.scaler.chrome(),
        paused: app.rotation.mode() == Mode::Paused,
        flash: &app.flash,
    })
    .map(Message::Header);

    let body: Element<'_, Message> = match app.current_term() {
        Some(term) => card_view(app, term),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let grip = mouse_area(
        Text::new(GRIP_GLYPH)
            .size(sizing::GRIP_SIZE)
            .color(app.flash.color_for(FlashTarget::Grip, palette::GRIP)),
    )
    .on_press(Message::GripPressed)
    .interaction(mouse::Interaction::ResizingDiagonallyDown);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body)
        .push(container(grip).align_right(Length::Fill))
        .into()
}

fn drawer_view(app: &App) -> Element<'_, Message> {
    drawer::view(drawer::ViewContext {
        interval_secs: app.session.config.interval_seconds,
        theme: app.session.config.theme_name,
        help_open: app.help_open,
        flash: &app.flash,
    })
    .map(Message::Drawer)
}

fn card_view<'a>(app: &'a App, term: &'a Term) -> Element<'a, Message> {
    card::view(card::ViewContext {
        term,
        palette: app.session.config.theme_name.palette(),
        fonts: app.scaler.fonts(),
        term_hovered: app.term_hovered,
    })
    .map(Message::Card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_sits_left_of_content() {
        assert_eq!(panes(true), &[Pane::Drawer, Pane::Content]);
        assert_eq!(panes(false), &[Pane::Content]);
    }
}
