// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The historical events served by the API
//!

use crate::FALLBACK_CATEGORY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use time_space_core::{Coordinates, Event, EventsResponse, Limit, LocationInfo};

/// The catalogue compiled into the binary
const BUNDLED_CATALOGUE: &str = include_str!("../data/catalogue.json");

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Unable to read the catalogue: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalogue: {0}")]
    Json(#[from] serde_json::Error),
}

/// A finer grained timeline for one event of a location's timeline
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CatalogueDrilldown {
    /// Date of the parent event, exactly as it appears in the parent timeline
    date: String,

    /// Title of the parent event
    title: String,

    events: Vec<Event>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CatalogueLocation {
    name: String,
    coordinates: Coordinates,

    /// In timeline order
    events: Vec<Event>,

    #[serde(default)]
    drilldowns: Vec<CatalogueDrilldown>,
}

/// Every location the API knows about, with its events
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Catalogue {
    locations: Vec<CatalogueLocation>,
}

/// Lower case with spaces replaced, used to build event IDs
fn slug(location: &str) -> String {
    location.trim().to_lowercase().replace(' ', "_")
}

impl Catalogue {
    /// The catalogue compiled into the binary
    pub fn bundled() -> Result<Self, CatalogueError> {
        Ok(serde_json::from_str(BUNDLED_CATALOGUE)?)
    }

    /// Load a catalogue from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Look up a location by name, ignoring case & surrounding whitespace
    pub fn location(&self, name: &str) -> Option<&CatalogueLocation> {
        let name = name.trim().to_lowercase();
        self.locations
            .iter()
            .find(|location| location.name.to_lowercase() == name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The top-level timeline for `requested` (the name as the client sent
    /// it, which is echoed back), or `None` for an unknown location
    pub fn events(&self, requested: &str, Limit(limit): Limit) -> Option<EventsResponse> {
        let location = self.location(requested)?;
        let slug = slug(requested);
        let events = location
            .events
            .iter()
            .take(limit as usize)
            .enumerate()
            .map(|(i, event)| {
                event
                    .clone()
                    .with_id(Some(format!("{slug}_{i}_{}", event.date())))
                    .with_coordinates(Some(location.coordinates))
            })
            .collect();
        Some(location.response(requested, events))
    }

    /// The timeline for the event of `requested`'s timeline with `date` and
    /// `title`.  Anything not in the catalogue gets a single placeholder
    /// event.
    pub fn drilldown(
        &self,
        requested: &str,
        date: &str,
        title: &str,
        Limit(limit): Limit,
    ) -> EventsResponse {
        let slug = slug(requested);
        let location = self.location(requested);
        let drilldown = location.and_then(|location| {
            location.drilldowns.iter().find(|drilldown| {
                drilldown.date == date && drilldown.title.eq_ignore_ascii_case(title.trim())
            })
        });

        match (location, drilldown) {
            (Some(location), Some(drilldown)) => {
                let events = drilldown
                    .events
                    .iter()
                    .take(limit as usize)
                    .enumerate()
                    .map(|(i, event)| {
                        event
                            .clone()
                            .with_id(Some(format!("{slug}_sub_{i}_{}", event.date())))
                            .with_coordinates(Some(location.coordinates))
                    })
                    .collect();
                location.response(requested, events)
            }
            (location, _) => {
                debug!("No drill-down for \"{title}\" ({date}) in {requested}, using a placeholder");
                let placeholder = Event::new(
                    date,
                    format!("Details about {title}"),
                    format!("More information about the event '{title}' that occurred in {requested} on {date}."),
                )
                .with_id(Some(format!("{slug}_drilldown_0_{date}")))
                .with_category(Some(FALLBACK_CATEGORY.to_string()));
                EventsResponse {
                    location: LocationInfo {
                        name: requested.to_string(),
                        coordinates: location.map(|location| location.coordinates),
                    },
                    events: vec![placeholder],
                }
            }
        }
    }
}

impl CatalogueLocation {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    fn response(&self, requested: &str, events: Vec<Event>) -> EventsResponse {
        EventsResponse {
            location: LocationInfo {
                name: requested.to_string(),
                coordinates: Some(self.coordinates),
            },
            events,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn bundled() {
        let catalogue = Catalogue::bundled().unwrap();
        assert!(catalogue.len() >= 5);
        for name in ["Seattle", "Paris", "London", "Las Vegas", "Tokyo"] {
            let location = catalogue.location(name).unwrap();
            assert!(location.events.len() >= 5, "{name}");
            // Every event must be placeable on a timeline
            for event in location.events.iter().chain(location.drilldowns.iter().flat_map(|d| d.events.iter())) {
                assert!(event.year().is_some(), "{name}: {}", event.date());
            }
            // Every drill-down hangs off an event of the location
            for drilldown in &location.drilldowns {
                assert!(
                    location
                        .events
                        .iter()
                        .any(|event| event.date() == drilldown.date && event.title() == drilldown.title),
                    "{name}: {}",
                    drilldown.title
                );
            }
        }
    }

    #[test]
    fn events() {
        let catalogue = Catalogue::bundled().unwrap();
        let response = catalogue.events(" las VEGAS", Limit(3)).unwrap();
        assert_eq!(response.location.name, " las VEGAS");
        assert_eq!(response.events.len(), 3);
        let first = &response.events[0];
        assert_eq!(
            first.id(),
            Some(format!("las_vegas_0_{}", first.date()).as_str())
        );
        assert_eq!(first.coordinates(), response.location.coordinates);

        assert!(catalogue.events("Nowhereville", Limit(5)).is_none());
    }

    #[test]
    fn drilldown() {
        let catalogue = Catalogue::bundled().unwrap();
        let response = catalogue.drilldown("Paris", "1889", "eiffel tower", Limit(5));
        assert_eq!(response.events[0].title(), "Design");
        assert_eq!(response.events[0].id(), Some("paris_sub_0_1887"));

        let response = catalogue.drilldown("Paris", "1066", "Something else", Limit(5));
        assert_eq!(response.events.len(), 1);
        assert_eq!(response.events[0].title(), "Details about Something else");
        assert_eq!(response.events[0].date(), "1066");
        assert!(response.location.coordinates.is_some());

        let response = catalogue.drilldown("Nowhereville", "1900", "Founded", Limit(5));
        assert_eq!(response.events[0].id(), Some("nowhereville_drilldown_0_1900"));
        assert!(response.location.coordinates.is_none());
    }

    #[test]
    fn from_path() {
        let dir = TempDir::new("time-space-catalogue").unwrap();
        let path = dir.path().join("catalogue.json");
        std::fs::write(
            &path,
            r#"{"locations":[{"name":"Testville","coordinates":{"lat":1.0,"lng":2.0},"events":[{"date":"2001","title":"Founded"}]}]}"#,
        )
        .unwrap();
        let catalogue = Catalogue::from_path(&path).unwrap();
        assert_eq!(catalogue.location("testville").unwrap().name(), "Testville");

        assert!(matches!(
            Catalogue::from_path(Path::new("/nonexistent/catalogue.json")),
            Err(CatalogueError::Io(_))
        ));
    }
}
