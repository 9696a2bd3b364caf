// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Each component follows the "state down, messages up" pattern: a
//! `ViewContext` borrowed from the app goes in, a component `Message` comes
//! out and is wrapped by [`crate::app::Message`].
//!
//! - [`header`] - settings, play/pause and close controls, window drag
//! - [`card`] - the current term and description
//! - [`drawer`] - interval picker, theme chips, usage help
//! - [`feedback`] - click flash bookkeeping
//! - [`theme`] - named color themes
//! - [`styles`] and [`design_tokens`] - shared styling

pub mod card;
pub mod design_tokens;
pub mod drawer;
pub mod feedback;
pub mod header;
pub mod styles;
pub mod theme;
