// SPDX-License-Identifier: MPL-2.0
//! Click flash for header and drawer controls.
//!
//! Pressing a control paints it [`FLASH_COLOR`] and schedules a restore after
//! [`FLASH_DURATION`]. Every flash bumps a generation counter; a restore only
//! clears the flash it was scheduled for, so a quick double click does not cut
//! the second flash short.

use crate::ui::design_tokens::palette;
use crate::ui::theme::ThemeName;
use iced::Color;
use std::collections::HashMap;
use std::time::Duration;

pub const FLASH_DURATION: Duration = Duration::from_millis(100);

pub const FLASH_COLOR: Color = palette::FLASH;

/// Controls that flash when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashTarget {
    Settings,
    PlayPause,
    Close,
    HelpToggle,
    ThemeChip(ThemeName),
    Grip,
}

/// Generation of one flash, carried by its restore message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashGeneration(u64);

#[derive(Debug, Default)]
pub struct FlashState {
    active: HashMap<FlashTarget, FlashGeneration>,
    next_generation: u64,
}

impl FlashState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts flashing `target`; the caller schedules the restore.
    pub fn flash(&mut self, target: FlashTarget) -> FlashGeneration {
        self.next_generation += 1;
        let generation = FlashGeneration(self.next_generation);
        self.active.insert(target, generation);
        generation
    }

    /// Ends the flash started with `generation`. Returns `false` when a newer
    /// flash has taken over the target.
    pub fn restore(&mut self, target: FlashTarget, generation: FlashGeneration) -> bool {
        if self.active.get(&target) == Some(&generation) {
            self.active.remove(&target);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_flashing(&self, target: FlashTarget) -> bool {
        self.active.contains_key(&target)
    }

    /// Color to paint `target` with, given its resting color.
    #[must_use]
    pub fn color_for(&self, target: FlashTarget, resting: Color) -> Color {
        if self.is_flashing(target) {
            FLASH_COLOR
        } else {
            resting
        }
    }
}
