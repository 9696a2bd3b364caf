// SPDX-License-Identifier: MPL-2.0
//! Text width estimation.

use unicode_width::UnicodeWidthChar;

/// Advance of a single-column glyph, as a fraction of the font size.
const NARROW_ADVANCE_EM: f32 = 0.6;

/// Advance of a double-column (CJK, fullwidth) glyph.
const WIDE_ADVANCE_EM: f32 = 1.0;

/// Extra width taken by bold faces.
const BOLD_FACTOR: f32 = 1.05;

/// Font size and weight used for a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }
}

/// Reference font for the term line during initial sizing.
pub const TERM_FONT: FontSpec = FontSpec::bold(14.0);

/// Reference font for description lines during initial sizing.
pub const DESCRIPTION_FONT: FontSpec = FontSpec::regular(12.0);

/// Measures the rendered width of a single line of text, in logical pixels.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, FontSpec) -> f32,
{
    fn measure(&self, text: &str, font: FontSpec) -> f32 {
        self(text, font)
    }
}

/// Estimates widths from Unicode display columns.
///
/// Narrow glyphs advance 0.6 em and wide glyphs (Hangul, CJK ideographs,
/// fullwidth forms) 1.0 em. Zero-width and control characters add nothing.
/// The result is a column-count estimate, not a rendered pixel width; font
/// metrics and kerning are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphWidthMeasurer;

impl TextMeasurer for GlyphWidthMeasurer {
    fn measure(&self, text: &str, font: FontSpec) -> f32 {
        let ems: f32 = text
            .chars()
            .map(|c| match c.width() {
                Some(2) => WIDE_ADVANCE_EM,
                Some(1) => NARROW_ADVANCE_EM,
                _ => 0.0,
            })
            .sum();

        let weight = if font.bold { BOLD_FACTOR } else { 1.0 };
        ems * font.size * weight
    }
}
