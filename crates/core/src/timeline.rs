// SPDX-License-Identifier: MIT

//!
//! One screen of a timeline: the events for a location (or for one event of a
//! parent timeline), their positions, and which one is selected
//!

use crate::{Event, Location, Year};
use log::warn;
use serde::{Deserialize, Serialize};

/// A dot on the timeline
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelinePosition {
    year: Year,

    /// Set on the positions of a drill-down timeline that share the year of
    /// the event it was opened from
    is_active: bool,
}

impl TimelinePosition {
    pub fn new(year: Year, is_active: bool) -> Self {
        Self { year, is_active }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// A snapshot of one level of timeline navigation.
///
/// Either the top-level timeline of a [`Location`] ([`TimelineContext::root`])
/// or a finer grained timeline opened from one of its events
/// ([`TimelineContext::drilldown`]).  Contexts are restored verbatim when
/// navigating back, so everything needed to redraw one lives here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimelineContext {
    /// The location the events belong to
    location: Location,

    /// The location name for a root context, the anchor event title otherwise
    title: String,

    /// One per source event that has a derivable year, in the same order
    positions: Vec<TimelinePosition>,

    /// The events as returned by the event source
    source_events: Vec<Event>,

    /// Always the year of one of `positions` when set
    selected_year: Option<Year>,

    /// The parent timeline event this context was opened from
    anchor: Option<Event>,
}

impl TimelineContext {
    /// Create the top-level context for a location
    pub fn root(location: Location, events: Vec<Event>) -> Self {
        let title = location.name().to_string();
        Self::build(location, title, events, None)
    }

    /// Create a drill-down context for the `anchor` event of a parent timeline
    pub fn drilldown(location: Location, anchor: Event, events: Vec<Event>) -> Self {
        let title = anchor.title().to_string();
        Self::build(location, title, events, Some(anchor))
    }

    fn build(location: Location, title: String, events: Vec<Event>, anchor: Option<Event>) -> Self {
        let anchor_year = anchor.as_ref().and_then(Event::year);
        let positions: Vec<TimelinePosition> = events
            .iter()
            .filter_map(|event| match event.year() {
                Some(year) => Some(TimelinePosition::new(year, Some(year) == anchor_year)),
                None => {
                    warn!(
                        "No year can be derived from `{}` (\"{}\"), leaving it off the timeline",
                        event.date(),
                        event.title()
                    );
                    None
                }
            })
            .collect();
        let selected_year = positions.first().map(TimelinePosition::year);
        Self {
            location,
            title,
            positions,
            source_events: events,
            selected_year,
            anchor,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn positions(&self) -> &[TimelinePosition] {
        &self.positions
    }

    pub fn source_events(&self) -> &[Event] {
        &self.source_events
    }

    pub fn selected_year(&self) -> Option<Year> {
        self.selected_year
    }

    pub fn anchor(&self) -> Option<&Event> {
        self.anchor.as_ref()
    }

    /// Whether there is nothing to show on the timeline
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The first event (in list order) whose derived year is `year`
    pub fn event_for_year(&self, year: Year) -> Option<&Event> {
        self.source_events
            .iter()
            .find(|event| event.year() == Some(year))
    }

    /// The event shown in the detail panel, if any
    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_year
            .and_then(|year| self.event_for_year(year))
    }

    /// Select the position with the given year.  Returns `false` (and leaves
    /// the selection untouched) if no position has that year.
    pub fn select_year(&mut self, year: Year) -> bool {
        if self.positions.iter().any(|position| position.year == year) {
            self.selected_year = Some(year);
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_year = None;
    }
}
