// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Client consts
//!

/// Where the web API is expected when nothing else has been configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// The Mapbox places (forward geocoding) endpoint
pub const DEFAULT_GEOCODING_ENDPOINT: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// The maximum number of candidate places returned by a search
pub const GEOCODING_RESULT_LIMIT: usize = 5;

/// How long to wait for the web API before giving up (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
