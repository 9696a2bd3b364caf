// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::{App, Message, PendingTimer};
use crate::layout::GripDrag;
use crate::rotation::{Effect, ScheduledTick, TimerToken};
use crate::search;
use crate::ui::design_tokens::sizing;
use crate::ui::feedback::{FlashTarget, FLASH_DURATION};
use crate::ui::{card, drawer, header};
use iced::{keyboard, mouse, window, Size, Task};
use std::time::{Duration, Instant};

/// Resolves after `delay` without needing a runtime until first polled.
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

impl App {
    // =========================================================================
    // Rotation
    // =========================================================================

    /// Carries out a scheduler effect: swap the displayed term, abort the
    /// superseded timer and arm the next one.
    pub(super) fn apply_rotation(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Cancel(token) => {
                self.abort_timer(Some(token));
                Task::none()
            }
            Effect::Show {
                index,
                cancelled,
                next,
            } => {
                self.abort_timer(cancelled);
                let fit = self.show(index);
                let tick = self.arm_timer(next);
                Task::batch([fit, tick])
            }
        }
    }

    fn abort_timer(&mut self, token: Option<TimerToken>) {
        if let Some(timer) = self.timer.take() {
            if token.is_some_and(|token| token != timer.token) {
                tracing::debug!(?token, live = ?timer.token, "aborting unexpected rotation timer");
            }
            timer.handle.abort();
        }
    }

    fn arm_timer(&mut self, tick: ScheduledTick) -> Task<Message> {
        // Whatever is still armed is superseded by this one.
        self.abort_timer(None);
        let token = tick.token;
        let (task, handle) =
            Task::perform(sleep(tick.delay), move |()| Message::RotationTick(token)).abortable();
        self.timer = Some(PendingTimer { token, handle });
        task
    }

    /// Displays the term at `index`. The first term of the process also
    /// sizes the window.
    ///
    /// A press in progress and the hover state survive the swap; a tap that
    /// straddles a rotation searches for the term shown at release.
    fn show(&mut self, index: usize) -> Task<Message> {
        self.current = Some(index);

        let Some(term) = self.session.terms.get(index) else {
            return Task::none();
        };
        tracing::debug!(index, term = %term.term, "showing term");

        let Some(metrics) = self.sizer.fit_once(term) else {
            return Task::none();
        };
        self.session.config.set_layout(metrics);
        self.session.persist();

        let mut size = Size::new(metrics.width as f32, metrics.height as f32);
        if self.drawer_open {
            size.width += sizing::DRAWER_WIDTH;
        }
        self.resize_window(size)
    }

    // =========================================================================
    // Components
    // =========================================================================

    pub(super) fn handle_header(&mut self, message: header::Message) -> Task<Message> {
        let flash = message
            .flash_target()
            .map_or_else(Task::none, |target| self.start_flash(target));

        let task = match message {
            header::Message::ToggleDrawer => self.toggle_drawer(),
            header::Message::TogglePlayback => {
                let effect = self.rotation.toggle();
                tracing::info!(mode = ?self.rotation.mode(), "rotation toggled");
                self.apply_rotation(effect)
            }
            header::Message::Close => {
                tracing::info!("closing");
                self.abort_timer(None);
                iced::exit()
            }
            header::Message::DragWindow => match self.window_id {
                Some(id) => window::drag(id),
                None => Task::none(),
            },
        };
        Task::batch([flash, task])
    }

    pub(super) fn handle_drawer(&mut self, message: drawer::Message) -> Task<Message> {
        match message {
            drawer::Message::IntervalSelected(secs) => {
                self.session.config.interval_seconds = secs;
                self.session.persist();
                let effect = self.rotation.set_interval(secs);
                self.apply_rotation(effect)
            }
            drawer::Message::ThemeSelected(theme) => {
                self.session.config.theme_name = theme;
                self.session.persist();
                self.start_flash(FlashTarget::ThemeChip(theme))
            }
            drawer::Message::ToggleHelp => {
                self.help_open = !self.help_open;
                self.start_flash(FlashTarget::HelpToggle)
            }
        }
    }

    pub(super) fn handle_card(&mut self, message: card::Message) -> Task<Message> {
        match message {
            card::Message::TermHovered(hovered) => self.term_hovered = hovered,
            card::Message::TermPressed => {
                self.gesture.cancel();
                self.search_current();
            }
            card::Message::PointerMoved(position) => self.gesture.track(position),
            card::Message::Pressed => self.gesture.press_at_cursor(Instant::now()),
            card::Message::Released => {
                let gesture = self.gesture.release_at_cursor(Instant::now());
                tracing::trace!(?gesture, "text gesture");
                if gesture.is_tap() {
                    self.search_current();
                }
            }
            card::Message::PointerLeft => self.gesture.cancel(),
        }
        Task::none()
    }

    fn search_current(&self) {
        if let Some(term) = self.current_term() {
            search::search(self.launcher.as_ref(), term);
        }
    }

    pub(super) fn handle_grip_pressed(&mut self) -> Task<Message> {
        if let Some(cursor) = self.cursor {
            self.grip = Some(GripDrag::new(cursor, self.window_size));
        }
        self.start_flash(FlashTarget::Grip)
    }

    // =========================================================================
    // Native events
    // =========================================================================

    pub(super) fn handle_raw_event(
        &mut self,
        window: window::Id,
        event: iced::Event,
    ) -> Task<Message> {
        self.window_id = Some(window);

        match event {
            iced::Event::Window(window::Event::Resized(size)) => {
                self.window_size = size;
                self.scaler.resize(self.content_width(), size.height);
                Task::none()
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Some(position);
                match self.grip {
                    Some(grip) => {
                        let size = grip.size_at(position, self.min_window_size());
                        self.resize_window(size)
                    }
                    None => Task::none(),
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.grip = None;
                Task::none()
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if self.modifiers.control() {
                    self.zoom(delta);
                }
                Task::none()
            }
            iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = modifiers;
                Task::none()
            }
            _ => Task::none(),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn zoom(&mut self, delta: mouse::ScrollDelta) {
        let (mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. }) = delta;
        if y > 0.0 {
            self.scaler.zoom_in();
        } else if y < 0.0 {
            self.scaler.zoom_out();
        }
    }

    fn toggle_drawer(&mut self) -> Task<Message> {
        self.drawer_open = !self.drawer_open;
        let mut size = self.window_size;
        if self.drawer_open {
            size.width += sizing::DRAWER_WIDTH;
        } else {
            size.width = (size.width - sizing::DRAWER_WIDTH).max(sizing::MIN_WINDOW_WIDTH);
        }
        self.resize_window(size)
    }

    fn min_window_size(&self) -> Size {
        let extra = if self.drawer_open {
            sizing::DRAWER_WIDTH
        } else {
            0.0
        };
        Size::new(sizing::MIN_WINDOW_WIDTH + extra, sizing::MIN_WINDOW_HEIGHT)
    }

    /// Records the new size right away so layout follows without waiting for
    /// the window manager, then asks the window to match.
    fn resize_window(&mut self, size: Size) -> Task<Message> {
        self.window_size = size;
        self.scaler.resize(self.content_width(), size.height);
        match self.window_id {
            Some(id) => window::resize(id, size),
            None => Task::none(),
        }
    }

    fn start_flash(&mut self, target: FlashTarget) -> Task<Message> {
        let generation = self.flash.flash(target);
        Task::perform(sleep(FLASH_DURATION), move |()| Message::FlashRestore {
            target,
            generation,
        })
    }
}
