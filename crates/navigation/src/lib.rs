// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Time Space project*
//!
//! This library crate is the navigation state machine of the explorer.  It
//! owns the current location, the timeline being shown, the selection, and
//! the stack of timelines left behind when drilling down.
//!
//! - [`reduce`] is a pure `(state, event) -> (state, effect)` function.  The
//!   [`Effect`] describes any I/O to do; nothing is fetched here.
//! - [`Session`] runs the effects on tokio tasks and feeds the responses back
//!   in as events.
//! - [`Snapshot`] is everything a presentation layer needs to draw the state.
//!
//! Every request carries a [`RequestId`] and a response is only applied if it
//! answers the latest request of its kind, so a slow response can never
//! overwrite a newer navigation state.
//!

mod error;
mod event;
mod sequence;
mod session;
mod stack;
mod state;
mod view;

pub use error::*;
pub use event::*;
pub use sequence::*;
pub use session::*;
pub use stack::*;
pub use state::*;
pub use view::*;

#[macro_use]
extern crate log;
