// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Time Space project*
//!
//! This library crate provides the GUI parts of the GUI application: a search
//! box, a map showing the selected place, a card describing the selected
//! event, and a timeline to pick events from and drill down into.  Every
//! frame is drawn from a navigation [`time_space_navigation::Snapshot`].
//!

mod app;
mod components;
mod config;
mod consts;

pub use app::TimeSpaceApp;
pub use config::{Config, ConfigError};
pub use consts::DEFAULT_WINDOW_SIZE;

#[macro_use]
extern crate log;
