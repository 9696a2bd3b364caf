// SPDX-License-Identifier: MPL-2.0
//! `term_marquee` is a small always-on-top widget, built with the Iced GUI
//! framework, that cycles through a list of terms and their descriptions.
//!
//! The interesting parts are independent of the GUI:
//!
//! - [`rotation`] shows every term once per shuffled cycle on a cancellable
//!   timer.
//! - [`gesture`] tells a tap on the text from a drag or long press.
//! - [`layout`] fits the window to the first term and scales chrome and
//!   fonts with the window.
//!
//! [`app`] wires them to the iced runtime and [`ui`] draws the window.

pub mod app;
pub mod content;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod logging;
pub mod rotation;
pub mod search;
pub mod ui;
