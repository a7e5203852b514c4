// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Client errors
//!

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three ways fetching events can fail, as far as the user is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchErrorKind {
    /// No response at all (unreachable, refused, timed out)
    Transport,

    /// The web API has no data for the requested key
    NotFound,

    /// Anything else
    Other,
}

/// Errors that can arise when fetching events from the web API
#[derive(Error, Debug)]
pub enum EventSourceError {
    /// The HTTP client could not be built
    #[error("Unable to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The configured base URL can't have paths appended to it
    #[error("Invalid web API URL `{0}`")]
    Url(String),

    /// No response was received
    #[error("The web API could not be reached: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 404 response
    #[error("No historical data found for `{0}`")]
    NotFound(String),

    /// Any other non-2xx response
    #[error("The web API responded with status {0}")]
    Status(StatusCode),

    /// A 2xx response whose body isn't an events response
    #[error("The web API response could not be read: {0}")]
    Decode(#[source] reqwest::Error),
}

impl EventSourceError {
    /// Which user-facing kind of failure this is
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            EventSourceError::Transport(_) => FetchErrorKind::Transport,
            EventSourceError::NotFound(_) => FetchErrorKind::NotFound,
            EventSourceError::Client(_)
            | EventSourceError::Url(_)
            | EventSourceError::Status(_)
            | EventSourceError::Decode(_) => FetchErrorKind::Other,
        }
    }
}

/// Errors that can arise when searching for places.  These are never shown to
/// the user (a failed search is just an empty one) but are logged.
#[derive(Error, Debug)]
pub enum GeocodingError {
    /// No access token has been configured
    #[error("No geocoding access token has been configured")]
    MissingAccessToken,

    /// The configured endpoint can't have paths appended to it
    #[error("Invalid geocoding URL `{0}`")]
    Url(String),

    /// Transport, status, or decoding error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            EventSourceError::NotFound(String::from("Nowhereville")).kind(),
            FetchErrorKind::NotFound
        );
        assert_eq!(
            EventSourceError::Status(StatusCode::INTERNAL_SERVER_ERROR).kind(),
            FetchErrorKind::Other
        );
        assert_eq!(
            EventSourceError::Url(String::from("mailto:someone")).kind(),
            FetchErrorKind::Other
        );
    }
}
