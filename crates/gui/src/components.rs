// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The panels of the main window
//!

mod event_card;
mod map;
mod search;
mod timeline;

pub use event_card::*;
pub use map::*;
pub use search::*;
pub use timeline::*;
