// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless button painted with a flat background, as used by the header
/// icons. Hover does not change the look; the click flash does.
pub fn flat(background: Color, text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Round theme swatch. The selected chip gets a visible ring.
pub fn chip(color: Color, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let ring = if selected {
            palette::SELECTION
        } else if status == button::Status::Hovered {
            palette::GRIP
        } else {
            Color::TRANSPARENT
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color: ring,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_uses_given_colors() {
        let style = flat(Color::WHITE, Color::BLACK)(&Theme::Light, button::Status::Hovered);
        assert_eq!(style.background, Some(Background::Color(Color::WHITE)));
        assert_eq!(style.text_color, Color::BLACK);
    }

    #[test]
    fn selected_chip_has_ring() {
        let style = chip(Color::WHITE, true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, palette::SELECTION);

        let style = chip(Color::WHITE, false)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }
}
