// SPDX-License-Identifier: MPL-2.0
//! Content-based initial window sizing.
//!
//! The window is fitted to the first term shown after startup so the opening
//! presentation is neither clipped nor absurdly large. Fitting happens once
//! per process; later rotations keep the window size so it does not jitter.

use super::measure::{TextMeasurer, DESCRIPTION_FONT, TERM_FONT};
use crate::content::Term;
use crate::error::{Error, Result};

/// Left plus right margin around the widest line.
pub const HORIZONTAL_PADDING: f32 = 100.0;
/// Header height assumed before the responsive scaler has run.
pub const HEADER_HEIGHT_ESTIMATE: u32 = 36;
pub const TERM_LINE_HEIGHT: u32 = 30;
pub const DESCRIPTION_LINE_HEIGHT: u32 = 20;
pub const MIN_DESCRIPTION_HEIGHT: u32 = 40;
pub const DESCRIPTION_EXTRA: u32 = 20;
/// Applied above and below the content block.
pub const VERTICAL_PADDING: u32 = 40;

pub const DEFAULT_MIN_WIDTH: u32 = 400;
pub const DEFAULT_MAX_WIDTH: u32 = 800;
pub const DEFAULT_MIN_HEIGHT: u32 = 250;
pub const DEFAULT_MAX_HEIGHT: u32 = 500;

/// Window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub width: u32,
    pub height: u32,
}

/// Inclusive clamp range for fitted dimensions.
///
/// Construction rejects inverted ranges, so `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
}

impl SizeBounds {
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Result<Self> {
        if min_width > max_width {
            return Err(Error::Config(format!(
                "min width {} exceeds max width {}",
                min_width, max_width
            )));
        }
        if min_height > max_height {
            return Err(Error::Config(format!(
                "min height {} exceeds max height {}",
                min_height, max_height
            )));
        }
        Ok(Self {
            min_width,
            max_width,
            min_height,
            max_height,
        })
    }

    #[must_use]
    pub fn clamp(&self, metrics: LayoutMetrics) -> LayoutMetrics {
        LayoutMetrics {
            width: metrics.width.clamp(self.min_width, self.max_width),
            height: metrics.height.clamp(self.min_height, self.max_height),
        }
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Fits the window to a term's measured extents.
///
/// Widths are only as accurate as the measurer. The app uses
/// [`GlyphWidthMeasurer`](super::GlyphWidthMeasurer), which counts display
/// columns rather than shaping text, so fitted sizes are estimates that the
/// clamp bounds and padding absorb.
#[derive(Debug)]
pub struct LayoutSizer<M> {
    measurer: M,
    bounds: SizeBounds,
    fitted: bool,
}

impl<M: TextMeasurer> LayoutSizer<M> {
    pub fn new(measurer: M) -> Self {
        Self::with_bounds(measurer, SizeBounds::default())
    }

    pub fn with_bounds(measurer: M, bounds: SizeBounds) -> Self {
        Self {
            measurer,
            bounds,
            fitted: false,
        }
    }

    /// Computes clamped dimensions for `term` without recording anything.
    #[must_use]
    pub fn measure(&self, term: &Term) -> LayoutMetrics {
        let term_width = self.measurer.measure(&term.term, TERM_FONT);

        let lines: Vec<&str> = term
            .description
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        let widest_line = lines
            .iter()
            .map(|line| self.measurer.measure(line, DESCRIPTION_FONT))
            .fold(0.0_f32, f32::max);

        let content_width = (term_width.max(widest_line) + HORIZONTAL_PADDING).ceil();
        let line_count = u32::try_from(lines.len()).unwrap_or(u32::MAX);
        let description_block = MIN_DESCRIPTION_HEIGHT
            .max(line_count.saturating_mul(DESCRIPTION_LINE_HEIGHT))
            .saturating_add(DESCRIPTION_EXTRA);
        let content_height = HEADER_HEIGHT_ESTIMATE
            + TERM_LINE_HEIGHT
            + description_block
            + 2 * VERTICAL_PADDING;

        self.bounds.clamp(LayoutMetrics {
            width: content_width as u32,
            height: content_height,
        })
    }

    /// Fits the window to `term` the first time it is called and returns
    /// `None` on every later call.
    pub fn fit_once(&mut self, term: &Term) -> Option<LayoutMetrics> {
        if self.fitted {
            return None;
        }
        self.fitted = true;
        let metrics = self.measure(term);
        tracing::debug!(width = metrics.width, height = metrics.height, "fitted window to content");
        Some(metrics)
    }

    #[must_use]
    pub fn has_fitted(&self) -> bool {
        self.fitted
    }

    #[must_use]
    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }
}
