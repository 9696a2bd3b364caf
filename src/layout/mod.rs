// SPDX-License-Identifier: MPL-2.0
//! Window geometry and typography derived from content and window size.
//!
//! - [`sizer`] fits the window to the first term once per process.
//! - [`scaler`] keeps header, icon and font sizes proportional to the window.
//! - [`measure`] estimates rendered text widths for the sizer.
//! - [`grip`] turns resize-grip drags into window sizes.

pub mod grip;
pub mod measure;
pub mod scaler;
pub mod sizer;

pub use grip::GripDrag;
pub use measure::{FontSpec, GlyphWidthMeasurer, TextMeasurer};
pub use scaler::{ChromeMetrics, FontMetrics, ResponsiveScaler, ScaleState};
pub use sizer::{LayoutMetrics, LayoutSizer, SizeBounds};
