// SPDX-License-Identifier: MIT

//!
//! The Time Space location type
//!

use serde::{Deserialize, Serialize};

/// A point on the map (wire names `lat` & `lng`)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A place that can be shown on the map and have events fetched for it.
///
/// The name is the place's identity (it is what the event source is queried
/// with).  No deduplication is done across searches.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Location {
    /// The place name, e.g. "Paris"
    name: String,

    latitude: f64,

    longitude: f64,

    /// e.g. a state or province (absent when it would repeat the country)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,

    /// The full display name as returned by the geocoder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
}

impl Location {
    /// Create a new [`Location`] with no region, country or full name
    pub fn new<S: ToString>(name: S, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            region: None,
            country: None,
            full_name: None,
        }
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn with_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    pub fn with_full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lng: self.longitude,
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// The region & country joined for display under the name (e.g.
    /// "Île-de-France, France").  Empty if neither is known.
    pub fn subtitle(&self) -> String {
        [self.region(), self.country()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
