// SPDX-License-Identifier: MPL-2.0
//! Native event routing.
//!
//! Only the events the app reacts to are forwarded: window resizes, pointer
//! motion and left-button release (for the resize grip), the mouse wheel (for
//! Ctrl-zoom) and modifier changes. Every forwarded event also carries the
//! window id the app needs for window operations.

use super::Message;
use iced::{event, keyboard, mouse, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        let relevant = matches!(
            event,
            Event::Window(window::Event::Opened { .. } | window::Event::Resized(_))
                | Event::Mouse(
                    mouse::Event::CursorMoved { .. }
                        | mouse::Event::ButtonReleased(mouse::Button::Left)
                        | mouse::Event::WheelScrolled { .. }
                )
                | Event::Keyboard(keyboard::Event::ModifiersChanged(_))
        );

        relevant.then(|| Message::RawEvent {
            window: window_id,
            event,
        })
    })
}
