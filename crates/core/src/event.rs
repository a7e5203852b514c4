// SPDX-License-Identifier: MIT

//!
//! The Time Space event type
//!

use crate::{Coordinates, Year};
use serde::{Deserialize, Serialize};

/// A dated historical event.
///
/// Events have no global identity; within one timeline they are told apart by
/// their derived [`Year`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    /// Backend-assigned ID (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    /// Free-form date: a bare year or a parseable date string
    date: String,

    title: String,

    #[serde(default)]
    description: String,

    /// e.g. "political", "economic"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    coordinates: Option<Coordinates>,
}

impl Event {
    /// Create a new [`Event`] with no ID, category or coordinates
    pub fn new<D: ToString, T: ToString, S: ToString>(date: D, title: T, description: S) -> Self {
        Self {
            id: None,
            date: date.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: None,
            coordinates: None,
        }
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_coordinates(mut self, coordinates: Option<Coordinates>) -> Self {
        self.coordinates = coordinates;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// The year used to position this event on a timeline (see
    /// [`Year::derive`])
    pub fn year(&self) -> Option<Year> {
        Year::derive(&self.date)
    }
}
