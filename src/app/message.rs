// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::rotation::TimerToken;
use crate::ui::feedback::{FlashGeneration, FlashTarget};
use crate::ui::{card, drawer, header};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Drawer(drawer::Message),
    Card(card::Message),
    /// The resize grip was pressed.
    GripPressed,
    /// A rotation timer fired.
    RotationTick(TimerToken),
    /// A click flash has run its course.
    FlashRestore {
        target: FlashTarget,
        generation: FlashGeneration,
    },
    /// Native window, mouse and keyboard events.
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Config directory override (for settings.toml and terms.json).
    /// Takes precedence over `TERM_MARQUEE_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
    /// Explicit term file.
    pub terms_path: Option<PathBuf>,
    /// Seed for a reproducible shuffle order.
    pub seed: Option<u64>,
}
