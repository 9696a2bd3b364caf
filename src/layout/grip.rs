// SPDX-License-Identifier: MPL-2.0
//! Resize-grip arithmetic.
//!
//! The window keeps its top-left corner while the grip is dragged, so the
//! new size is the starting size plus how far the pointer travelled since the
//! press, never below the minimum.

use iced::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GripDrag {
    origin: Point,
    start: Size,
}

impl GripDrag {
    /// Starts a drag at `origin` (window coordinates) on a window of size
    /// `start`.
    #[must_use]
    pub fn new(origin: Point, start: Size) -> Self {
        Self { origin, start }
    }

    /// Window size for the current pointer position.
    #[must_use]
    pub fn size_at(&self, cursor: Point, min: Size) -> Size {
        Size::new(
            (self.start.width + cursor.x - self.origin.x).max(min.width),
            (self.start.height + cursor.y - self.origin.y).max(min.height),
        )
    }
}
