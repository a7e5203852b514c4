// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Checking for updates.  This trait reduces unnecessary rendering and thus
//! reduces CPU & energy usage.
//!
//! `egui` only redraws when there is some sort of interaction unless the app
//! explicitly requests a redraw.  A response to a request made in the
//! background (a geocoding search, a timeline fetch) arrives without any
//! interaction, so something has to ask for the redraw.  Requesting one every
//! few milliseconds works but burns CPU & battery for nothing most of the
//! time.  With this trait a redraw is only requested while something is
//! actually being waited on.
//!

/// Implementing types can check for updates and indicate whether they're
/// waiting for updates.  For example, a channel may need to be checked for
/// HTTP responses; while it is still waiting the app keeps scheduling
/// redraws.
pub trait CheckForUpdates {
    /// Check for any updates
    fn check_for_updates(&mut self);

    /// Whether the thing is waiting for updates.
    fn waiting_for_updates(&mut self) -> bool;
}
