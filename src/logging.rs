// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the binary.
//!
//! Precedence: `RUST_LOG` > `--log-level` > `info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// Filter directive used when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(level: Option<&str>) -> String {
    let level = level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL);
    format!("term_marquee={level}")
}

/// Installs the global subscriber. Calling it twice is harmless; the second
/// call is ignored.
pub fn init(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
