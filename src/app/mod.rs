// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` wires the rotation scheduler, gesture classifier and layout
//! helpers to the iced runtime. Scheduler effects become abortable timer
//! tasks, pointer events become gestures and window operations, and setting
//! changes are written back to `settings.toml` as they happen.

pub mod config;
mod message;
pub mod paths;
mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use session::Session;

use crate::content::Term;
use crate::gesture::GestureClassifier;
use crate::layout::{GlyphWidthMeasurer, GripDrag, LayoutSizer, ResponsiveScaler};
use crate::rotation::{Mode, RotationScheduler, TimerToken};
use crate::search::{Launcher, SystemBrowser};
use crate::ui::design_tokens::sizing;
use crate::ui::feedback::FlashState;
use iced::{keyboard, task, window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;

pub const APP_TITLE: &str = "TermMarquee";

/// Where the window first appears, in logical pixels from the top-left.
pub const WINDOW_POSITION: Point = Point::new(200.0, 200.0);

/// The armed rotation timer and the handle that aborts it.
struct PendingTimer {
    token: TimerToken,
    handle: task::Handle,
}

/// Root Iced application state.
pub struct App {
    session: Session,
    rotation: RotationScheduler,
    timer: Option<PendingTimer>,
    current: Option<usize>,
    sizer: LayoutSizer<GlyphWidthMeasurer>,
    scaler: ResponsiveScaler,
    gesture: GestureClassifier,
    flash: FlashState,
    launcher: Box<dyn Launcher>,
    window_id: Option<window::Id>,
    window_size: Size,
    /// Last pointer position in window coordinates.
    cursor: Option<Point>,
    modifiers: keyboard::Modifiers,
    grip: Option<GripDrag>,
    drawer_open: bool,
    help_open: bool,
    term_hovered: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.current)
            .field("mode", &self.rotation.mode())
            .field("window_size", &self.window_size)
            .field("drawer_open", &self.drawer_open)
            .finish()
    }
}

/// Builds the settings of the single undecorated, always-on-top window.
#[must_use]
pub fn window_settings(size: Size) -> window::Settings {
    window::Settings {
        size,
        position: window::Position::Specific(WINDOW_POSITION),
        min_size: Some(Size::new(
            sizing::MIN_WINDOW_WIDTH,
            sizing::MIN_WINDOW_HEIGHT,
        )),
        decorations: false,
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(session: Session) -> iced::Result {
    use std::cell::RefCell;

    // The app is built up front so the window opens at the fitted size.
    // iced 0.14 wants an `Fn` boot; it hands out the prepared state once and
    // would rebuild from the session if ever asked again.
    let fallback = session.clone();
    let (app, task) = App::new(session);
    let settings = window_settings(app.window_size);
    let prepared = RefCell::new(Some((app, task)));
    let boot = move || {
        prepared
            .borrow_mut()
            .take()
            .unwrap_or_else(|| App::new(fallback.clone()))
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Shows the first term, fits the window to it and arms the first
    /// rotation timer.
    pub fn new(session: Session) -> (Self, Task<Message>) {
        Self::with_launcher(session, Box::new(SystemBrowser))
    }

    /// Same as [`App::new`] with a custom browser launcher.
    pub fn with_launcher(session: Session, launcher: Box<dyn Launcher>) -> (Self, Task<Message>) {
        let count = session.terms.len();
        let interval = session.config.interval_seconds;
        let rotation = match session.seed {
            Some(seed) => RotationScheduler::seeded(count, interval, seed),
            None => RotationScheduler::new(count, interval),
        };
        let saved = session.config.layout();
        let window_size = Size::new(saved.width as f32, saved.height as f32);

        let mut app = App {
            session,
            rotation,
            timer: None,
            current: None,
            sizer: LayoutSizer::new(GlyphWidthMeasurer),
            scaler: ResponsiveScaler::new(window_size.width, window_size.height),
            gesture: GestureClassifier::new(),
            flash: FlashState::new(),
            launcher,
            window_id: None,
            window_size,
            cursor: None,
            modifiers: keyboard::Modifiers::default(),
            grip: None,
            drawer_open: false,
            help_open: false,
            term_hovered: false,
        };

        let effect = app.rotation.advance();
        let task = app.apply_rotation(effect);
        (app, task)
    }

    fn title(&self) -> String {
        APP_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.session.config.theme_name.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => self.handle_header(header_message),
            Message::Drawer(drawer_message) => self.handle_drawer(drawer_message),
            Message::Card(card_message) => self.handle_card(card_message),
            Message::GripPressed => self.handle_grip_pressed(),
            Message::RotationTick(token) => {
                let effect = self.rotation.on_timer(token);
                self.apply_rotation(effect)
            }
            Message::FlashRestore { target, generation } => {
                self.flash.restore(target, generation);
                Task::none()
            }
            Message::RawEvent { window, event } => self.handle_raw_event(window, event),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// The term on display.
    #[must_use]
    pub fn current_term(&self) -> Option<&Term> {
        self.current.and_then(|index| self.session.terms.get(index))
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn rotation_mode(&self) -> Mode {
        self.rotation.mode()
    }

    /// Token of the live rotation timer, if one is armed.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.timer.as_ref().map(|timer| timer.token)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    #[must_use]
    pub fn scaler(&self) -> &ResponsiveScaler {
        &self.scaler
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn flash(&self) -> &FlashState {
        &self.flash
    }

    /// Width left for the term card once the drawer is accounted for.
    fn content_width(&self) -> f32 {
        if self.drawer_open {
            self.window_size.width - sizing::DRAWER_WIDTH
        } else {
            self.window_size.width
        }
    }
}
