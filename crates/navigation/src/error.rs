// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The errors shown to the user
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time_space_client::FetchErrorKind;

/// Why a timeline couldn't be shown.  The `Display` text is what the user
/// sees.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationError {
    /// The web API couldn't be reached
    #[error("Backend service is currently unavailable. Please try again later.")]
    ServiceUnavailable,

    /// The web API has nothing for the location
    #[error("No historical data for {0}")]
    NoHistoricalData(String),

    /// Any other failure fetching a location's timeline
    #[error("Unable to load historical data. Please check your connection and try again.")]
    LoadFailed,

    /// Any failure fetching a drill-down timeline
    #[error("Failed to load detailed timeline. Please try again.")]
    DrilldownFailed,
}

impl NavigationError {
    /// The error for a failed fetch of `location`'s top-level timeline
    pub fn for_location(kind: FetchErrorKind, location: &str) -> Self {
        match kind {
            FetchErrorKind::Transport => NavigationError::ServiceUnavailable,
            FetchErrorKind::NotFound => NavigationError::NoHistoricalData(location.to_string()),
            FetchErrorKind::Other => NavigationError::LoadFailed,
        }
    }
}
