// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::border;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Solid surface with the given background and text color.
pub fn surface(background: Color, text_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..container::Style::default()
    }
}

/// Surface separated from its neighbour by a thin border, used for the
/// settings drawer.
pub fn panel(background: Color, text_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            color: Color {
                a: 0.25,
                ..text_color
            },
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
