// SPDX-License-Identifier: MPL-2.0
//! Header bar: settings, play/pause and close controls.
//!
//! Pressing anywhere on the bar outside a control starts a window drag, which
//! stands in for the title bar the undecorated window does not have.

use crate::layout::ChromeMetrics;
use crate::ui::feedback::{FlashState, FlashTarget};
use crate::ui::styles;
use crate::ui::theme::Palette;
use iced::widget::{button, container, mouse_area, Row, Space, Text};
use iced::{Color, Element, Length};

pub const SETTINGS_GLYPH: &str = "⚙";
pub const PAUSE_GLYPH: &str = "⏸";
pub const PLAY_GLYPH: &str = "▶";
pub const CLOSE_GLYPH: &str = "✕";

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub palette: Palette,
    pub chrome: ChromeMetrics,
    pub paused: bool,
    pub flash: &'a FlashState,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleDrawer,
    TogglePlayback,
    Close,
    DragWindow,
}

impl Message {
    /// Control to flash when this message is emitted.
    #[must_use]
    pub fn flash_target(self) -> Option<FlashTarget> {
        match self {
            Message::ToggleDrawer => Some(FlashTarget::Settings),
            Message::TogglePlayback => Some(FlashTarget::PlayPause),
            Message::Close => Some(FlashTarget::Close),
            Message::DragWindow => None,
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let palette = ctx.palette;
    let background = |target| ctx.flash.color_for(target, palette.header);

    let playback_glyph = if ctx.paused { PLAY_GLYPH } else { PAUSE_GLYPH };

    let bar = Row::new()
        .height(Length::Fill)
        .push(icon_button(
            SETTINGS_GLYPH,
            ctx.chrome.icon_size,
            background(FlashTarget::Settings),
            palette.text,
            Message::ToggleDrawer,
        ))
        .push(icon_button(
            playback_glyph,
            ctx.chrome.icon_size,
            background(FlashTarget::PlayPause),
            palette.text,
            Message::TogglePlayback,
        ))
        .push(Space::new().width(Length::Fill))
        .push(icon_button(
            CLOSE_GLYPH,
            ctx.chrome.close_icon_size,
            background(FlashTarget::Close),
            palette.text,
            Message::Close,
        ));

    let bar = container(bar)
        .width(Length::Fill)
        .height(ctx.chrome.header_height)
        .style(styles::container::surface(palette.header, palette.text));

    mouse_area(bar).on_press(Message::DragWindow).into()
}

fn icon_button<'a>(
    glyph: &'a str,
    size: f32,
    background: Color,
    text_color: Color,
    message: Message,
) -> Element<'a, Message> {
    let label = container(Text::new(glyph).size(size)).center_y(Length::Fill);
    button(label)
        .height(Length::Fill)
        .padding([0.0, size * 0.6])
        .on_press(message)
        .style(styles::button::flat(background, text_color))
        .into()
}
