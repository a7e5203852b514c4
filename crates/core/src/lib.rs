// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Time Space project*
//!
//! This crate defines the basic datatypes used across the Time Space project
//! (API clients, navigation, desktop application, web API).
//!
//! A location is searched for, a list of dated events is fetched for it, and
//! those events are laid out along a timeline by their derived [`Year`].  A
//! [`TimelineContext`] is one "screen" of that timeline.
//!

mod event;
mod limit;
mod location;
mod response;
mod timeline;
mod year;

pub use event::*;
pub use limit::*;
pub use location::*;
pub use response::*;
pub use timeline::*;
pub use year::*;
