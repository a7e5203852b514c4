// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! What can happen to the navigation state, and the I/O it can ask for
//!

use crate::RequestId;
use serde::{Deserialize, Serialize};
use time_space_client::FetchErrorKind;
use time_space_core::{EventsResponse, Limit, Location, Year};

/// User input and request responses, fed to [`crate::reduce`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum NavigationEvent {
    /// The search box text changed
    QueryChanged(String),

    /// The search box was submitted (select the first candidate, or search)
    SubmitQuery,

    /// Hide the candidate list without selecting anything
    DismissCandidates,

    /// A place was chosen, show its timeline
    SelectLocation(Location),

    /// A location search finished
    SearchCompleted {
        request: RequestId,
        results: Vec<Location>,
    },

    /// A timeline (top-level or drill-down) fetch finished
    EventsLoaded {
        request: RequestId,
        result: Result<EventsResponse, FetchErrorKind>,
    },

    /// A timeline position was clicked
    SelectYear(Year),

    ClearSelection,

    /// Open the timeline of the selected event
    DrillDown,

    /// Return to the timeline left when drilling down
    Back,
}

/// I/O requested by [`crate::reduce`].  Its response must come back as the
/// matching [`NavigationEvent`] carrying the same `request`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Effect {
    /// Answer with [`NavigationEvent::SearchCompleted`]
    Search { request: RequestId, query: String },

    /// Answer with [`NavigationEvent::EventsLoaded`]
    FetchEvents {
        request: RequestId,
        location: String,
        limit: Limit,
    },

    /// Answer with [`NavigationEvent::EventsLoaded`]
    FetchDrilldown {
        request: RequestId,
        location: String,
        date: String,
        title: String,
        limit: Limit,
    },
}

impl Effect {
    /// The ID its response must carry
    pub fn request(&self) -> RequestId {
        match self {
            Effect::Search { request, .. }
            | Effect::FetchEvents { request, .. }
            | Effect::FetchDrilldown { request, .. } => *request,
        }
    }
}
