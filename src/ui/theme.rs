// SPDX-License-Identifier: MPL-2.0
//! Named color themes.
//!
//! Each theme is a flat triple: the body background, the slightly darker
//! header bar, and the text color. The name is what gets persisted.

use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colors of one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub header: Color,
    pub text: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeName {
    #[default]
    Yellow,
    Pink,
    Green,
    Blue,
    Purple,
    Grey,
    Dark,
}

impl ThemeName {
    /// Every theme, in the order the chips are shown.
    pub const ALL: [ThemeName; 7] = [
        ThemeName::Yellow,
        ThemeName::Pink,
        ThemeName::Green,
        ThemeName::Blue,
        ThemeName::Purple,
        ThemeName::Grey,
        ThemeName::Dark,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Yellow => "Yellow",
            ThemeName::Pink => "Pink",
            ThemeName::Green => "Green",
            ThemeName::Blue => "Blue",
            ThemeName::Purple => "Purple",
            ThemeName::Grey => "Grey",
            ThemeName::Dark => "Dark",
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        let (background, header) = match self {
            ThemeName::Yellow => (0xfff7d1, 0xe3d8a3),
            ThemeName::Pink => (0xfccce4, 0xe3a8c3),
            ThemeName::Green => (0xccffcc, 0xa8e3a8),
            ThemeName::Blue => (0xcceeff, 0xa8cee3),
            ThemeName::Purple => (0xe6ccff, 0xc3a8e3),
            ThemeName::Grey => (0xf2f2f2, 0xd9d9d9),
            ThemeName::Dark => (0x333333, 0x222222),
        };
        Palette {
            background: Color::from_rgb8(red(background), green(background), blue(background)),
            header: Color::from_rgb8(red(header), green(header), blue(header)),
            text: if self.is_dark() {
                Color::WHITE
            } else {
                Color::BLACK
            },
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeName::Dark
    }

    /// Base iced theme used for widgets we do not style ourselves (pick lists).
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn red(rgb: u32) -> u8 {
    ((rgb >> 16) & 0xff) as u8
}

fn green(rgb: u32) -> u8 {
    ((rgb >> 8) & 0xff) as u8
}

fn blue(rgb: u32) -> u8 {
    (rgb & 0xff) as u8
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a persisted theme name matches no known theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}'", self.0)
    }
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yellow_palette_matches_hex() {
        let palette = ThemeName::Yellow.palette();
        assert_eq!(palette.background, Color::from_rgb8(0xff, 0xf7, 0xd1));
        assert_eq!(palette.header, Color::from_rgb8(0xe3, 0xd8, 0xa3));
        assert_eq!(palette.text, Color::BLACK);
    }

    #[test]
    fn only_dark_uses_white_text() {
        for theme in ThemeName::ALL {
            let expected = if theme == ThemeName::Dark {
                Color::WHITE
            } else {
                Color::BLACK
            };
            assert_eq!(theme.palette().text, expected, "{theme}");
        }
    }

    #[test]
    fn header_is_darker_than_background() {
        for theme in ThemeName::ALL {
            let palette = theme.palette();
            assert!(palette.header.r <= palette.background.r, "{theme}");
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("grey".parse::<ThemeName>(), Ok(ThemeName::Grey));
        assert_eq!(" Purple ".parse::<ThemeName>(), Ok(ThemeName::Purple));
        assert!("Magenta".parse::<ThemeName>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for theme in ThemeName::ALL {
            assert_eq!(theme.to_string().parse::<ThemeName>(), Ok(theme));
        }
    }
}
