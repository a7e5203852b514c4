// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Time Space project*
//!
//! This library crate holds the two request/response collaborators of the
//! explorer:
//!
//! - [`LocationResolver`]: free text to a ranked list of candidate places
//!   ([`MapboxResolver`] talks to the Mapbox places endpoint)
//! - [`EventSource`]: a location (or a location & one of its events) to a list
//!   of dated events ([`HttpEventSource`] talks to the Time Space web API)
//!
//! Both are traits so that the navigation layer can be driven by in-memory
//! fakes in tests.
//!

mod consts;
mod error;
mod event_source;
mod geocoding;

pub use consts::*;
pub use error::*;
pub use event_source::*;
pub use geocoding::*;

pub use reqwest::StatusCode;

#[macro_use]
extern crate log;
