// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the widget views.
//!
//! Theme colors live in [`crate::ui::theme`]; the tokens here are the ones
//! that stay the same whatever theme is active.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Pressed-control flash (#cccccc).
    pub const FLASH: Color = Color::from_rgb(0.8, 0.8, 0.8);
    /// Term color while hovered.
    pub const HOVER_LINK: Color = Color::from_rgb(0.0, 0.0, 1.0);
    /// Border drawn around the selected theme chip.
    pub const SELECTION: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const GRIP: Color = Color::from_rgb(0.667, 0.667, 0.667);

    // Settings drawer, identical under every theme
    pub const DRAWER_SURFACE: Color = Color::from_rgb(0.976, 0.976, 0.976);
    pub const DRAWER_TITLE: Color = Color::from_rgb(0.2, 0.2, 0.2);
    pub const DRAWER_LABEL: Color = Color::from_rgb(0.333, 0.333, 0.333);
    pub const DRAWER_MUTED: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Width the settings drawer adds to the window.
    pub const DRAWER_WIDTH: f32 = 240.0;
    pub const THEME_CHIP: f32 = 22.0;
    pub const GRIP_SIZE: f32 = 16.0;
    /// Smallest window the resize grip allows.
    pub const MIN_WINDOW_WIDTH: f32 = 300.0;
    pub const MIN_WINDOW_HEIGHT: f32 = 150.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE: f32 = 16.0;
    pub const LABEL: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const FULL: f32 = 9999.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_is_cccccc() {
        assert_eq!(palette::FLASH, Color::from_rgb8(0xcc, 0xcc, 0xcc));
    }

    #[test]
    fn grip_minimum_fits_header() {
        assert!(sizing::MIN_WINDOW_HEIGHT > 48.0 + sizing::GRIP_SIZE);
    }
}
