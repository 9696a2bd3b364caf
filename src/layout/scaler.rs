// SPDX-License-Identifier: MPL-2.0
//! Window-proportional chrome and typography.
//!
//! Header height and icon sizes follow the window height; font sizes follow
//! the content width multiplied by a user zoom factor. Degenerate dimensions
//! (1px or less, seen while the window is still being laid out) are skipped
//! and the previous metrics stay in effect.

/// Header height as a fraction of the window height.
const HEADER_RATIO: f32 = 0.096;
const MIN_HEADER_HEIGHT: f32 = 28.0;
const MAX_HEADER_HEIGHT: f32 = 48.0;

const ICON_RATIO: f32 = 0.5;
const MIN_ICON_SIZE: f32 = 11.0;
const MAX_ICON_SIZE: f32 = 18.0;

const CLOSE_ICON_RATIO: f32 = 0.42;
const MIN_CLOSE_ICON_SIZE: f32 = 10.0;
const MAX_CLOSE_ICON_SIZE: f32 = 15.0;

/// Content width per point of base font size.
const WIDTH_PER_FONT_POINT: f32 = 25.0;
const MIN_FONT_SIZE: f32 = 10.0;
/// The description is drawn this much smaller than the term.
const DESCRIPTION_FONT_OFFSET: f32 = 2.0;

pub const DEFAULT_FONT_SCALE: f32 = 1.0;
pub const MIN_FONT_SCALE: f32 = 0.5;
pub const FONT_SCALE_STEP: f32 = 0.1;

/// Below or at this size a dimension is considered not laid out yet.
const DEGENERATE_DIMENSION: f32 = 1.0;

/// Header bar and icon sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeMetrics {
    pub header_height: f32,
    pub icon_size: f32,
    pub close_icon_size: f32,
}

impl ChromeMetrics {
    /// Derives chrome sizes from the window height.
    #[must_use]
    pub fn for_height(window_height: f32) -> Option<Self> {
        if window_height <= DEGENERATE_DIMENSION {
            return None;
        }
        let header_height =
            (window_height * HEADER_RATIO).round().clamp(MIN_HEADER_HEIGHT, MAX_HEADER_HEIGHT);
        Some(Self {
            header_height,
            icon_size: (header_height * ICON_RATIO)
                .round()
                .clamp(MIN_ICON_SIZE, MAX_ICON_SIZE),
            close_icon_size: (header_height * CLOSE_ICON_RATIO)
                .round()
                .clamp(MIN_CLOSE_ICON_SIZE, MAX_CLOSE_ICON_SIZE),
        })
    }
}

/// Term and description font sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub term_size: f32,
    pub description_size: f32,
}

impl FontMetrics {
    /// Derives font sizes from the content width and zoom factor.
    #[must_use]
    pub fn for_width(content_width: f32, scale: ScaleState) -> Option<Self> {
        if content_width <= DEGENERATE_DIMENSION {
            return None;
        }
        let base = (content_width / WIDTH_PER_FONT_POINT).floor();
        let term_size = (base * scale.font_scale()).round().max(MIN_FONT_SIZE);
        Some(Self {
            term_size,
            description_size: term_size - DESCRIPTION_FONT_OFFSET,
        })
    }
}

/// User zoom factor applied to the width-derived font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    font_scale: f32,
}

impl ScaleState {
    #[must_use]
    pub fn new(font_scale: f32) -> Self {
        Self {
            font_scale: Self::normalize(font_scale),
        }
    }

    #[must_use]
    pub fn font_scale(self) -> f32 {
        self.font_scale
    }

    #[must_use]
    pub fn zoomed_in(self) -> Self {
        Self::new(self.font_scale + FONT_SCALE_STEP)
    }

    #[must_use]
    pub fn zoomed_out(self) -> Self {
        Self::new(self.font_scale - FONT_SCALE_STEP)
    }

    /// Keeps the factor on the 0.1 grid so repeated steps do not drift, and
    /// never below the minimum.
    fn normalize(value: f32) -> f32 {
        ((value * 10.0).round() / 10.0).max(MIN_FONT_SCALE)
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            font_scale: DEFAULT_FONT_SCALE,
        }
    }
}

/// Keeps chrome and fonts in step with the window.
#[derive(Debug, Clone)]
pub struct ResponsiveScaler {
    scale: ScaleState,
    content_width: Option<f32>,
    chrome: ChromeMetrics,
    fonts: FontMetrics,
}

impl ResponsiveScaler {
    /// Creates a scaler for an initial content width and window height.
    #[must_use]
    pub fn new(content_width: f32, window_height: f32) -> Self {
        let mut scaler = Self {
            scale: ScaleState::default(),
            content_width: None,
            chrome: ChromeMetrics {
                header_height: MIN_HEADER_HEIGHT,
                icon_size: MIN_ICON_SIZE,
                close_icon_size: MIN_CLOSE_ICON_SIZE,
            },
            fonts: FontMetrics {
                term_size: MIN_FONT_SIZE,
                description_size: MIN_FONT_SIZE - DESCRIPTION_FONT_OFFSET,
            },
        };
        scaler.resize(content_width, window_height);
        scaler
    }

    /// Recomputes chrome and fonts after a resize.
    pub fn resize(&mut self, content_width: f32, window_height: f32) {
        if let Some(chrome) = ChromeMetrics::for_height(window_height) {
            self.chrome = chrome;
        }
        if content_width > DEGENERATE_DIMENSION {
            self.content_width = Some(content_width);
        }
        self.refresh_fonts();
    }

    /// Grows the text by one zoom step. Chrome is left alone.
    pub fn zoom_in(&mut self) {
        self.scale = self.scale.zoomed_in();
        self.refresh_fonts();
    }

    /// Shrinks the text by one zoom step, never below the minimum factor.
    pub fn zoom_out(&mut self) {
        self.scale = self.scale.zoomed_out();
        self.refresh_fonts();
    }

    #[must_use]
    pub fn chrome(&self) -> ChromeMetrics {
        self.chrome
    }

    #[must_use]
    pub fn fonts(&self) -> FontMetrics {
        self.fonts
    }

    #[must_use]
    pub fn scale(&self) -> ScaleState {
        self.scale
    }

    fn refresh_fonts(&mut self) {
        if let Some(fonts) = self
            .content_width
            .and_then(|width| FontMetrics::for_width(width, self.scale))
        {
            self.fonts = fonts;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_follows_window_height() {
        let chrome = ChromeMetrics::for_height(300.0).expect("valid height");
        // 300 * 0.096 = 28.8 -> 29
        assert_eq!(chrome.header_height, 29.0);
        assert_eq!(chrome.icon_size, 15.0);
        assert_eq!(chrome.close_icon_size, 12.0);
    }

    #[test]
    fn header_is_clamped() {
        let small = ChromeMetrics::for_height(100.0).expect("valid height");
        assert_eq!(small.header_height, 28.0);
        assert_eq!(small.icon_size, 14.0);

        let tall = ChromeMetrics::for_height(2000.0).expect("valid height");
        assert_eq!(tall.header_height, 48.0);
        assert_eq!(tall.icon_size, 18.0);
        assert_eq!(tall.close_icon_size, 15.0);
    }

    #[test]
    fn degenerate_dimensions_are_skipped() {
        assert_eq!(ChromeMetrics::for_height(1.0), None);
        assert_eq!(FontMetrics::for_width(0.0, ScaleState::default()), None);
    }

    #[test]
    fn fonts_follow_width() {
        let fonts = FontMetrics::for_width(600.0, ScaleState::default()).expect("valid width");
        assert_eq!(fonts.term_size, 24.0);
        assert_eq!(fonts.description_size, 22.0);
    }

    #[test]
    fn fonts_have_a_floor() {
        let fonts = FontMetrics::for_width(100.0, ScaleState::default()).expect("valid width");
        assert_eq!(fonts.term_size, 10.0);
        assert_eq!(fonts.description_size, 8.0);
    }

    #[test]
    fn scale_multiplies_base_font() {
        let fonts = FontMetrics::for_width(610.0, ScaleState::new(1.5)).expect("valid width");
        // floor(24.4) = 24 -> 36
        assert_eq!(fonts.term_size, 36.0);
    }

    #[test]
    fn zoom_out_is_floored() {
        let mut scale = ScaleState::default();
        for _ in 0..20 {
            scale = scale.zoomed_out();
        }
        assert_eq!(scale.font_scale(), MIN_FONT_SCALE);
    }

    #[test]
    fn zoom_in_has_no_ceiling_and_does_not_drift() {
        let mut scale = ScaleState::default();
        for _ in 0..30 {
            scale = scale.zoomed_in();
        }
        assert_eq!(scale.font_scale(), 4.0);
    }

    #[test]
    fn zoom_only_changes_fonts() {
        let mut scaler = ResponsiveScaler::new(600.0, 300.0);
        let chrome = scaler.chrome();
        let fonts = scaler.fonts();

        scaler.zoom_in();
        assert_eq!(scaler.chrome(), chrome);
        assert!(scaler.fonts().term_size > fonts.term_size);
    }

    #[test]
    fn degenerate_resize_keeps_previous_metrics() {
        let mut scaler = ResponsiveScaler::new(600.0, 300.0);
        let chrome = scaler.chrome();
        let fonts = scaler.fonts();

        scaler.resize(1.0, 0.0);
        assert_eq!(scaler.chrome(), chrome);
        assert_eq!(scaler.fonts(), fonts);
    }

    #[test]
    fn resize_recomputes_both() {
        let mut scaler = ResponsiveScaler::new(600.0, 300.0);
        scaler.resize(800.0, 500.0);
        assert_eq!(scaler.chrome().header_height, 48.0);
        assert_eq!(scaler.fonts().term_size, 32.0);
    }
}
