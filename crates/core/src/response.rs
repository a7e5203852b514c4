// SPDX-License-Identifier: MIT

//!
//! The body returned by the events endpoints of the web API
//!

use crate::{Coordinates, Event};
use serde::{Deserialize, Serialize};

/// The location an events response is about
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LocationInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Response body of both `GET /locations/{name}/events` and
/// `GET /locations/{name}/events/drilldown`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventsResponse {
    pub location: LocationInfo,

    /// In timeline order
    pub events: Vec<Event>,
}
