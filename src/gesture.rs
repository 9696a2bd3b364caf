// SPDX-License-Identifier: MPL-2.0
//! Tap versus drag/long-press disambiguation for interactive text.
//!
//! A press over the description records where and when it started and is
//! always consumed, so no text-selection anchor is ever set. The matching
//! release decides: a short, nearly motionless press is a tap and triggers the
//! search action; anything else is swallowed.

use iced::Point;
use std::time::{Duration, Instant};

/// Movement on either axis must stay strictly below this (in pixels).
pub const TAP_MAX_DISTANCE: f32 = 5.0;

/// Press duration must stay strictly below this.
pub const TAP_MAX_DURATION: Duration = Duration::from_millis(300);

/// Outcome of a press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Short and still: run the action.
    Tap,
    /// The pointer moved too far.
    Drag,
    /// The pointer stayed down too long.
    Hold,
    /// Release without a recorded press.
    Unanchored,
}

impl Gesture {
    #[must_use]
    pub fn is_tap(self) -> bool {
        self == Gesture::Tap
    }
}

/// A press waiting for its release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePress {
    pub started_at: Instant,
    pub origin: Point,
}

impl GesturePress {
    /// Classifies the release that ends this press.
    #[must_use]
    pub fn classify(&self, released_at: Instant, position: Point) -> Gesture {
        let dx = (position.x - self.origin.x).abs();
        let dy = (position.y - self.origin.y).abs();
        let held = released_at.saturating_duration_since(self.started_at);

        if dx >= TAP_MAX_DISTANCE || dy >= TAP_MAX_DISTANCE {
            Gesture::Drag
        } else if held >= TAP_MAX_DURATION {
            Gesture::Hold
        } else {
            Gesture::Tap
        }
    }
}

/// Tracks the pointer over one region and classifies press/release pairs.
///
/// Positions are region-local, as reported by the region's move events.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    press: Option<GesturePress>,
    cursor: Option<Point>,
}

impl GestureClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest pointer position inside the region.
    pub fn track(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    /// Starts a gesture at an explicit position.
    pub fn press(&mut self, at: Instant, position: Point) {
        self.cursor = Some(position);
        self.press = Some(GesturePress {
            started_at: at,
            origin: position,
        });
    }

    /// Starts a gesture at the last tracked position.
    pub fn press_at_cursor(&mut self, at: Instant) {
        let position = self.cursor.unwrap_or(Point::ORIGIN);
        self.press(at, position);
    }

    /// Ends the current gesture at an explicit position.
    pub fn release(&mut self, at: Instant, position: Point) -> Gesture {
        self.cursor = Some(position);
        match self.press.take() {
            Some(press) => press.classify(at, position),
            None => Gesture::Unanchored,
        }
    }

    /// Ends the current gesture at the last tracked position.
    pub fn release_at_cursor(&mut self, at: Instant) -> Gesture {
        let Some(position) = self.cursor.or(self.press.map(|press| press.origin)) else {
            self.press = None;
            return Gesture::Unanchored;
        };
        self.release(at, position)
    }

    /// Drops any pending press, e.g. when the pointer leaves the region.
    pub fn cancel(&mut self) {
        self.press = None;
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed_at(origin: Point) -> (GestureClassifier, Instant) {
        let start = Instant::now();
        let mut classifier = GestureClassifier::new();
        classifier.press(start, origin);
        (classifier, start)
    }

    #[test]
    fn short_still_press_is_tap() {
        let (mut classifier, start) = pressed_at(Point::new(10.0, 10.0));
        let gesture = classifier.release(start + Duration::from_millis(100), Point::new(12.0, 11.0));
        assert_eq!(gesture, Gesture::Tap);
    }

    #[test]
    fn horizontal_movement_is_drag() {
        let (mut classifier, start) = pressed_at(Point::new(10.0, 10.0));
        let gesture = classifier.release(start + Duration::from_millis(100), Point::new(20.0, 10.0));
        assert_eq!(gesture, Gesture::Drag);
    }

    #[test]
    fn long_press_is_hold() {
        let (mut classifier, start) = pressed_at(Point::new(10.0, 10.0));
        let gesture = classifier.release(start + Duration::from_millis(500), Point::new(10.0, 10.0));
        assert_eq!(gesture, Gesture::Hold);
    }

    #[test]
    fn thresholds_are_exclusive() {
        let origin = Point::new(0.0, 0.0);
        let start = Instant::now();
        let press = GesturePress {
            started_at: start,
            origin,
        };

        assert_eq!(
            press.classify(start + Duration::from_millis(10), Point::new(0.0, 5.0)),
            Gesture::Drag
        );
        assert_eq!(
            press.classify(start + TAP_MAX_DURATION, origin),
            Gesture::Hold
        );
        assert_eq!(
            press.classify(start + Duration::from_millis(299), Point::new(4.9, 4.9)),
            Gesture::Tap
        );
    }

    #[test]
    fn release_without_press_is_unanchored() {
        let mut classifier = GestureClassifier::new();
        assert_eq!(
            classifier.release(Instant::now(), Point::new(1.0, 1.0)),
            Gesture::Unanchored
        );
    }

    #[test]
    fn release_consumes_the_press() {
        let (mut classifier, start) = pressed_at(Point::new(3.0, 3.0));
        classifier.release(start, Point::new(3.0, 3.0));
        assert_eq!(
            classifier.release(start, Point::new(3.0, 3.0)),
            Gesture::Unanchored
        );
    }

    #[test]
    fn tracked_cursor_positions_are_used() {
        let start = Instant::now();
        let mut classifier = GestureClassifier::new();
        classifier.track(Point::new(40.0, 40.0));
        classifier.press_at_cursor(start);
        classifier.track(Point::new(41.0, 43.0));

        let gesture = classifier.release_at_cursor(start + Duration::from_millis(50));
        assert!(gesture.is_tap());
    }

    #[test]
    fn dragging_via_tracked_cursor_is_not_tap() {
        let start = Instant::now();
        let mut classifier = GestureClassifier::new();
        classifier.track(Point::new(40.0, 40.0));
        classifier.press_at_cursor(start);
        classifier.track(Point::new(90.0, 40.0));

        let gesture = classifier.release_at_cursor(start + Duration::from_millis(50));
        assert_eq!(gesture, Gesture::Drag);
    }

    #[test]
    fn cancel_drops_pending_press() {
        let (mut classifier, start) = pressed_at(Point::new(3.0, 3.0));
        classifier.cancel();
        assert_eq!(
            classifier.release_at_cursor(start),
            Gesture::Unanchored
        );
    }
}
