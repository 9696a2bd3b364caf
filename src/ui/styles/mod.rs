// SPDX-License-Identifier: MPL-2.0
//! Widget styles parameterized by the active palette.

pub mod button;
pub mod container;
