// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! What the presentation layer draws, computed from the navigation state
//!

use crate::{NavigationState, Status};
use serde::Serialize;
use time_space_core::{Location, Year};

/// The pin on the map
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// One position on the timeline row
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineDot {
    pub year: Year,
    pub selected: bool,

    /// Shares the year of the event the timeline was drilled down from
    pub active: bool,
}

/// The panel describing the selected event
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventDetail {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Option<String>,

    /// False while a timeline is loading
    pub can_drill_down: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum Banner {
    None,
    Loading { location: String },
    DrillingDown { title: String },
    Error(String),
    Empty { location: String },
}

/// Everything needed to draw one frame
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub marker: Option<MapMarker>,

    /// Of the timeline being shown
    pub title: Option<String>,

    /// How many timelines going back can return to
    pub depth: usize,

    pub timeline: Vec<TimelineDot>,
    pub detail: Option<EventDetail>,
    pub banner: Banner,

    /// Title of the timeline going back would restore
    pub back: Option<String>,

    pub query: String,
    pub candidates: Vec<Location>,
    pub show_candidates: bool,
}

impl NavigationState {
    pub fn snapshot(&self) -> Snapshot {
        let context = self.context();
        let pending = self.is_pending();

        let marker = self.location().map(|location| MapMarker {
            latitude: location.latitude(),
            longitude: location.longitude(),
            label: location.name().to_string(),
        });

        let timeline = context
            .map(|context| {
                context
                    .positions()
                    .iter()
                    .map(|position| TimelineDot {
                        year: position.year(),
                        selected: context.selected_year() == Some(position.year()),
                        active: position.is_active(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let detail = context
            .and_then(|context| context.selected_event())
            .map(|event| EventDetail {
                title: event.title().to_string(),
                description: event.description().to_string(),
                date: event.date().to_string(),
                category: event.category().map(str::to_string),
                can_drill_down: !pending,
            });

        let banner = match self.status() {
            Status::Loading { location, .. } => Banner::Loading {
                location: location.name().to_string(),
            },
            Status::DrillingDown { anchor, .. } => Banner::DrillingDown {
                title: anchor.title().to_string(),
            },
            Status::Error(error) => Banner::Error(error.to_string()),
            Status::Ready => match context {
                Some(context) if context.is_empty() => Banner::Empty {
                    location: context.location().name().to_string(),
                },
                _ => Banner::None,
            },
            Status::Idle => Banner::None,
        };

        Snapshot {
            marker,
            title: context.map(|context| context.title().to_string()),
            depth: self.stack().len(),
            timeline,
            detail,
            banner,
            back: self.stack().peek().map(|parent| parent.title().to_string()),
            query: self.search().query().to_string(),
            candidates: self.search().candidates().to_vec(),
            show_candidates: self.search().show_candidates(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{NavigationEvent, RequestId, reduce};
    use time_space_client::FetchErrorKind;
    use time_space_core::{Event, EventsResponse, LocationInfo};

    fn paris() -> Location {
        Location::new("Paris", 48.8566, 2.3522)
    }

    fn fetch(state: NavigationState, event: NavigationEvent) -> (NavigationState, RequestId) {
        let (state, effect) = reduce(state, event);
        (state, effect.unwrap().request())
    }

    fn answer(state: NavigationState, request: RequestId, events: Vec<Event>) -> NavigationState {
        let result = Ok(EventsResponse {
            location: LocationInfo {
                name: "Paris".to_string(),
                coordinates: None,
            },
            events,
        });
        reduce(state, NavigationEvent::EventsLoaded { request, result }).0
    }

    #[test]
    fn idle() {
        let snapshot = NavigationState::default().snapshot();
        assert_eq!(snapshot.marker, None);
        assert_eq!(snapshot.title, None);
        assert_eq!(snapshot.banner, Banner::None);
        assert!(snapshot.timeline.is_empty());
        assert_eq!(snapshot.back, None);
    }

    #[test]
    fn loading_then_ready() {
        let (state, id) = fetch(NavigationState::default(), NavigationEvent::SelectLocation(paris()));
        assert_eq!(
            state.snapshot().banner,
            Banner::Loading {
                location: "Paris".to_string()
            }
        );

        let state = answer(
            state,
            id,
            vec![
                Event::new("1889", "Eiffel Tower", "Completed for the World's Fair")
                    .with_category(Some("cultural".to_string())),
                Event::new("1969", "Concorde", "First flight"),
            ],
        );
        let snapshot = state.snapshot();
        assert_eq!(
            snapshot.marker,
            Some(MapMarker {
                latitude: 48.8566,
                longitude: 2.3522,
                label: "Paris".to_string(),
            })
        );
        assert_eq!(snapshot.title.as_deref(), Some("Paris"));
        assert_eq!(snapshot.banner, Banner::None);
        assert_eq!(
            snapshot.timeline,
            vec![
                TimelineDot {
                    year: Year::new(1889),
                    selected: true,
                    active: false,
                },
                TimelineDot {
                    year: Year::new(1969),
                    selected: false,
                    active: false,
                },
            ]
        );
        assert_eq!(
            snapshot.detail,
            Some(EventDetail {
                title: "Eiffel Tower".to_string(),
                description: "Completed for the World's Fair".to_string(),
                date: "1889".to_string(),
                category: Some("cultural".to_string()),
                can_drill_down: true,
            })
        );
    }

    #[test]
    fn drilling_down() {
        let (state, id) = fetch(NavigationState::default(), NavigationEvent::SelectLocation(paris()));
        let state = answer(state, id, vec![Event::new("1889", "Eiffel Tower", "")]);
        let (state, id) = fetch(state, NavigationEvent::DrillDown);

        let snapshot = state.snapshot();
        assert_eq!(
            snapshot.banner,
            Banner::DrillingDown {
                title: "Eiffel Tower".to_string()
            }
        );
        assert!(!snapshot.detail.unwrap().can_drill_down);
        assert_eq!(snapshot.depth, 1);
        assert_eq!(snapshot.back.as_deref(), Some("Paris"));
        assert_eq!(snapshot.title.as_deref(), Some("Paris"));

        let state = answer(
            state,
            id,
            vec![
                Event::new("1887", "Design", ""),
                Event::new("1889-03-31", "Opening", ""),
            ],
        );
        let snapshot = state.snapshot();
        assert_eq!(snapshot.depth, 1);
        assert_eq!(snapshot.back.as_deref(), Some("Paris"));
        assert_eq!(snapshot.title.as_deref(), Some("Eiffel Tower"));
        assert_eq!(
            snapshot.timeline.iter().map(|dot| dot.active).collect::<Vec<_>>(),
            vec![false, true]
        );
    }

    #[test]
    fn empty_and_error() {
        let (state, id) = fetch(NavigationState::default(), NavigationEvent::SelectLocation(paris()));
        let state = answer(state, id, vec![]);
        assert_eq!(
            state.snapshot().banner,
            Banner::Empty {
                location: "Paris".to_string()
            }
        );
        assert_eq!(state.snapshot().detail, None);

        let (state, request) = fetch(state, NavigationEvent::SelectLocation(paris()));
        let (state, _) = reduce(
            state,
            NavigationEvent::EventsLoaded {
                request,
                result: Err(FetchErrorKind::Transport),
            },
        );
        let snapshot = state.snapshot();
        assert_eq!(
            snapshot.banner,
            Banner::Error("Backend service is currently unavailable. Please try again later.".to_string())
        );
        assert!(snapshot.timeline.is_empty());
        // The map still shows where the failed fetch was for
        assert_eq!(snapshot.marker.unwrap().label, "Paris");
    }
}
