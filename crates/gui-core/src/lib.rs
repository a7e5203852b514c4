// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Time Space project*
//!
//! This library crate includes code that the Time Space desktop GUI
//! application uses that other projects may also wish to use.
//!

mod check_for_updates;
mod egui;

pub use check_for_updates::*;
pub use egui::*;
