// SPDX-License-Identifier: MPL-2.0
//! Default values for the session configuration.

use crate::ui::theme::ThemeName;

pub const DEFAULT_THEME_NAME: ThemeName = ThemeName::Yellow;

/// Default seconds between two terms.
pub const DEFAULT_INTERVAL_SECS: u32 = 10;

/// Window size used until the first term has been fitted.
pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 300;
