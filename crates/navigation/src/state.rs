// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The navigation state and the pure reducer that drives it
//!

use crate::{Effect, NavigationError, NavigationEvent, NavigationStack, RequestId, RequestSequence};
use serde::{Deserialize, Serialize};
use time_space_client::FetchErrorKind;
use time_space_core::{Event, EventsResponse, Limit, Location, TimelineContext, Year};

/// What the state machine is doing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Status {
    /// Nothing has been selected yet
    Idle,

    /// Fetching the top-level timeline of `location`
    Loading { request: RequestId, location: Location },

    /// Fetching the timeline of `anchor`, an event of the current context
    DrillingDown { request: RequestId, anchor: Event },

    /// The current context (if any) is complete
    Ready,

    /// The last fetch failed
    Error(NavigationError),
}

/// The search box and its suggestions
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    query: String,
    candidates: Vec<Location>,
    show_candidates: bool,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[Location] {
        &self.candidates
    }

    pub fn show_candidates(&self) -> bool {
        self.show_candidates
    }

    fn clear_candidates(&mut self) {
        self.candidates.clear();
        self.show_candidates = false;
    }
}

/// Everything the explorer knows.  Only changed through [`reduce`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NavigationState {
    status: Status,

    /// The location on the map.  Always the current context's location once
    /// a timeline has loaded.
    location: Option<Location>,

    /// The timeline being shown
    context: Option<TimelineContext>,

    stack: NavigationStack,

    search: SearchState,

    sequence: RequestSequence,

    /// Passed to every fetch
    limit: Limit,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Limit::default())
    }
}

/// Apply `event` to `state`, returning the new state and any I/O to perform.
/// Events that are invalid in the current state leave it unchanged.
pub fn reduce(state: NavigationState, event: NavigationEvent) -> (NavigationState, Option<Effect>) {
    let mut state = state;
    let effect = state.apply(event);
    (state, effect)
}

impl NavigationState {
    pub fn new(limit: Limit) -> Self {
        Self {
            status: Status::Idle,
            location: None,
            context: None,
            stack: NavigationStack::default(),
            search: SearchState::default(),
            sequence: RequestSequence::default(),
            limit,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn context(&self) -> Option<&TimelineContext> {
        self.context.as_ref()
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn limit(&self) -> Limit {
        self.limit
    }

    /// Whether a timeline fetch is in flight
    pub fn is_pending(&self) -> bool {
        matches!(self.status, Status::Loading { .. } | Status::DrillingDown { .. })
    }

    /// The user facing error, if the last fetch failed
    pub fn error(&self) -> Option<&NavigationError> {
        match &self.status {
            Status::Error(error) => Some(error),
            _ => None,
        }
    }

    fn apply(&mut self, event: NavigationEvent) -> Option<Effect> {
        match event {
            NavigationEvent::QueryChanged(query) => self.query_changed(query),
            NavigationEvent::SubmitQuery => self.submit_query(),
            NavigationEvent::DismissCandidates => {
                self.search.show_candidates = false;
                None
            }
            NavigationEvent::SelectLocation(location) => Some(self.select_location(location)),
            NavigationEvent::SearchCompleted { request, results } => {
                self.search_completed(request, results);
                None
            }
            NavigationEvent::EventsLoaded { request, result } => {
                self.events_loaded(request, result);
                None
            }
            NavigationEvent::SelectYear(year) => {
                self.select_year(year);
                None
            }
            NavigationEvent::ClearSelection => {
                self.clear_selection();
                None
            }
            NavigationEvent::DrillDown => self.drill_down(),
            NavigationEvent::Back => {
                self.back();
                None
            }
        }
    }

    fn query_changed(&mut self, query: String) -> Option<Effect> {
        let trimmed = query.trim().to_string();
        self.search.query = query;
        if trimmed.is_empty() {
            self.search.clear_candidates();
            self.sequence.invalidate_search();
            return None;
        }
        let query = trimmed;
        let request = self.sequence.issue_search();
        Some(Effect::Search { request, query })
    }

    fn submit_query(&mut self) -> Option<Effect> {
        match self.search.candidates.first().cloned() {
            Some(location) => Some(self.select_location(location)),
            None => {
                let query = self.search.query.clone();
                self.query_changed(query)
            }
        }
    }

    fn search_completed(&mut self, request: RequestId, results: Vec<Location>) {
        if !self.sequence.is_latest_search(request) {
            debug!("Discarding stale search results for request {request}");
            return;
        }
        self.search.show_candidates = !results.is_empty();
        self.search.candidates = results;
    }

    fn select_location(&mut self, location: Location) -> Effect {
        info!("Loading the timeline for {}", location.name());
        self.search.query = location.name().to_string();
        self.search.clear_candidates();
        self.sequence.invalidate_search();

        let request = self.sequence.issue_primary();
        let effect = Effect::FetchEvents {
            request,
            location: location.name().to_string(),
            limit: self.limit,
        };
        self.status = Status::Loading { request, location };
        effect
    }

    fn events_loaded(&mut self, request: RequestId, result: Result<EventsResponse, FetchErrorKind>) {
        if !self.sequence.is_latest_primary(request) {
            debug!("Discarding stale timeline for request {request}");
            return;
        }
        self.sequence.invalidate_primary();

        match std::mem::replace(&mut self.status, Status::Ready) {
            Status::Loading { location, .. } => self.finish_load(location, result),
            Status::DrillingDown { anchor, .. } => self.finish_drilldown(anchor, result),
            other => {
                warn!("Timeline for request {request} arrived with nothing pending");
                self.status = other;
            }
        }
    }

    fn finish_load(&mut self, location: Location, result: Result<EventsResponse, FetchErrorKind>) {
        match result {
            Ok(response) => {
                debug!(
                    "Loaded {} events for {}",
                    response.events.len(),
                    location.name()
                );
                let context = TimelineContext::root(location.clone(), response.events);
                self.stack.clear();
                self.location = Some(location);
                self.context = Some(context);
                self.status = Status::Ready;
            }
            Err(kind) => {
                let error = NavigationError::for_location(kind, location.name());
                warn!("Loading the timeline for {} failed: {error}", location.name());
                self.location = Some(location);
                self.context = None;
                self.status = Status::Error(error);
            }
        }
    }

    fn finish_drilldown(&mut self, anchor: Event, result: Result<EventsResponse, FetchErrorKind>) {
        let response = match result {
            Ok(response) => response,
            Err(kind) => {
                warn!("Drilling down into \"{}\" failed ({kind:?})", anchor.title());
                self.status = Status::Error(NavigationError::DrilldownFailed);
                return;
            }
        };
        let Some(location) = self.context.as_ref().map(|parent| parent.location().clone()) else {
            warn!("Drill-down into \"{}\" finished without a parent timeline", anchor.title());
            return;
        };
        debug!(
            "Drilled down into \"{}\" ({} events, depth {})",
            anchor.title(),
            response.events.len(),
            self.stack.len()
        );
        self.location = Some(location.clone());
        self.context = Some(TimelineContext::drilldown(location, anchor, response.events));
        self.status = Status::Ready;
    }

    fn select_year(&mut self, year: Year) {
        if self.is_pending() {
            debug!("Ignoring selection of {year} while a timeline is loading");
            return;
        }
        if let Some(context) = self.context.as_mut() {
            if !context.select_year(year) {
                debug!("{year} is not on the timeline");
            }
        }
    }

    fn clear_selection(&mut self) {
        if self.is_pending() {
            return;
        }
        if let Some(context) = self.context.as_mut() {
            context.clear_selection();
        }
    }

    fn drill_down(&mut self) -> Option<Effect> {
        if self.is_pending() {
            debug!("Ignoring drill-down while a timeline is loading");
            return None;
        }
        let context = self.context.as_ref()?;
        let Some(anchor) = context.selected_event().cloned() else {
            debug!("No event for the selected year, nothing to drill down into");
            return None;
        };
        let location = context.location().name().to_string();
        let parent = context.clone();

        // The parent stays on screen until the drill-down arrives
        self.stack.push(parent);
        let request = self.sequence.issue_primary();
        let effect = Effect::FetchDrilldown {
            request,
            location,
            date: anchor.date().to_string(),
            title: anchor.title().to_string(),
            limit: self.limit,
        };
        self.status = Status::DrillingDown { request, anchor };
        Some(effect)
    }

    fn back(&mut self) {
        let Some(context) = self.stack.pop() else {
            debug!("Nothing to go back to");
            return;
        };
        self.sequence.invalidate_primary();
        self.location = Some(context.location().clone());
        self.context = Some(context);
        self.status = Status::Ready;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time_space_core::LocationInfo;

    fn paris() -> Location {
        Location::new("Paris", 48.8566, 2.3522)
            .with_region(Some("Île-de-France".to_string()))
            .with_country(Some("France".to_string()))
    }

    fn seattle() -> Location {
        Location::new("Seattle", 47.6062, -122.3321)
    }

    fn response(location: &str, events: Vec<Event>) -> Result<EventsResponse, FetchErrorKind> {
        Ok(EventsResponse {
            location: LocationInfo {
                name: location.to_string(),
                coordinates: None,
            },
            events,
        })
    }

    fn paris_events() -> Vec<Event> {
        vec![
            Event::new("1889", "Eiffel Tower", "Completed for the World's Fair"),
            Event::new("1969", "Concorde", "First flight"),
        ]
    }

    fn eiffel_events() -> Vec<Event> {
        vec![
            Event::new("1887", "Design", "Construction begins"),
            Event::new("1889-03-31", "Opening", "The tower opens"),
        ]
    }

    /// Apply an event that must not produce an effect
    fn step(state: NavigationState, event: NavigationEvent) -> NavigationState {
        let (state, effect) = reduce(state, event);
        assert_eq!(effect, None);
        state
    }

    /// Apply an event that must produce an effect
    fn request(state: NavigationState, event: NavigationEvent) -> (NavigationState, RequestId) {
        let (state, effect) = reduce(state, event);
        let request = effect.expect("an effect").request();
        (state, request)
    }

    fn loaded(state: NavigationState, request: RequestId, events: Vec<Event>) -> NavigationState {
        step(
            state,
            NavigationEvent::EventsLoaded {
                request,
                result: response("Paris", events),
            },
        )
    }

    fn failed(state: NavigationState, request: RequestId, kind: FetchErrorKind) -> NavigationState {
        step(
            state,
            NavigationEvent::EventsLoaded {
                request,
                result: Err(kind),
            },
        )
    }

    fn at_paris() -> NavigationState {
        let (state, id) = request(NavigationState::default(), NavigationEvent::SelectLocation(paris()));
        loaded(state, id, paris_events())
    }

    fn drill(state: NavigationState, events: Vec<Event>) -> NavigationState {
        let (state, id) = request(state, NavigationEvent::DrillDown);
        loaded(state, id, events)
    }

    #[test]
    fn select_location() {
        let (state, effect) = reduce(NavigationState::default(), NavigationEvent::SelectLocation(paris()));
        let Some(Effect::FetchEvents {
            request,
            location,
            limit,
        }) = effect
        else {
            panic!("expected a fetch, got {effect:?}");
        };
        assert_eq!(location, "Paris");
        assert_eq!(limit, Limit(5));
        assert!(state.is_pending());
        assert_eq!(state.search().query(), "Paris");

        let state = loaded(state, request, paris_events());
        assert_eq!(state.status(), &Status::Ready);
        assert_eq!(state.location(), Some(&paris()));
        let context = state.context().unwrap();
        assert_eq!(context.location(), &paris());
        assert_eq!(
            context.positions().iter().map(|p| p.year().value()).collect::<Vec<_>>(),
            vec![1889, 1969]
        );
        assert_eq!(context.selected_year(), Some(Year::new(1889)));
        assert_eq!(context.selected_event().unwrap().title(), "Eiffel Tower");
    }

    #[test]
    fn select_year() {
        let state = step(at_paris(), NavigationEvent::SelectYear(Year::new(1969)));
        let context = state.context().unwrap();
        assert_eq!(context.selected_year(), Some(Year::new(1969)));
        assert_eq!(context.selected_event().unwrap().title(), "Concorde");

        // Not on the timeline
        let before = state.clone();
        let state = step(state, NavigationEvent::SelectYear(Year::new(1066)));
        assert_eq!(state, before);

        let state = step(state, NavigationEvent::ClearSelection);
        assert_eq!(state.context().unwrap().selected_year(), None);
    }

    #[test]
    fn drill_down_and_back() {
        let root = at_paris();
        let root_context = root.context().cloned();

        let (state, effect) = reduce(root, NavigationEvent::DrillDown);
        let Some(Effect::FetchDrilldown {
            request,
            location,
            date,
            title,
            limit,
        }) = effect
        else {
            panic!("expected a drill-down, got {effect:?}");
        };
        assert_eq!(
            (location.as_str(), date.as_str(), title.as_str(), limit),
            ("Paris", "1889", "Eiffel Tower", Limit(5))
        );
        assert!(matches!(state.status(), Status::DrillingDown { anchor, .. } if anchor.title() == "Eiffel Tower"));
        assert_eq!(state.stack().len(), 1);
        assert_eq!(state.stack().peek(), root_context.as_ref());
        assert_eq!(state.context().cloned(), root_context);

        let state = loaded(state, request, eiffel_events());
        assert_eq!(state.stack().len(), 1);
        let context = state.context().unwrap();
        assert_eq!(context.title(), "Eiffel Tower");
        assert_eq!(context.anchor().unwrap().title(), "Eiffel Tower");
        assert_eq!(
            context
                .positions()
                .iter()
                .map(|p| (p.year().value(), p.is_active()))
                .collect::<Vec<_>>(),
            vec![(1887, false), (1889, true)]
        );
        assert_eq!(context.selected_event().unwrap().title(), "Design");

        let state = step(state, NavigationEvent::Back);
        assert!(state.stack().is_empty());
        assert_eq!(state.context().cloned(), root_context);
        assert_eq!(state.location(), Some(&paris()));
        assert_eq!(state.status(), &Status::Ready);
    }

    #[test]
    fn back_restores_every_level() {
        let mut state = at_paris();
        let mut contexts = vec![state.context().cloned().unwrap()];
        for _ in 0..4 {
            state = drill(state, eiffel_events());
            contexts.push(state.context().cloned().unwrap());
        }
        assert_eq!(state.stack().len(), 4);

        // Leave a different selection on the deepest level
        state = step(state, NavigationEvent::SelectYear(Year::new(1889)));
        contexts.pop();

        while let Some(expected) = contexts.pop() {
            state = step(state, NavigationEvent::Back);
            assert_eq!(state.context(), Some(&expected));
        }
        assert!(state.stack().is_empty());

        // Empty stack
        let before = state.clone();
        let state = step(state, NavigationEvent::Back);
        assert_eq!(state, before);
    }

    #[test]
    fn drill_down_without_selection() {
        let state = step(at_paris(), NavigationEvent::ClearSelection);
        let before = state.clone();
        let state = step(state, NavigationEvent::DrillDown);
        assert_eq!(state, before);

        let state = step(NavigationState::default(), NavigationEvent::DrillDown);
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn drill_down_failure_keeps_parent() {
        let (state, id) = request(at_paris(), NavigationEvent::DrillDown);
        let state = failed(state, id, FetchErrorKind::NotFound);
        assert_eq!(state.error(), Some(&NavigationError::DrilldownFailed));
        assert_eq!(state.stack().len(), 1);
        assert_eq!(state.context().unwrap().title(), "Paris");

        let state = drill(at_paris(), eiffel_events());
        let parent = state.context().cloned();

        let (state, id) = request(state, NavigationEvent::DrillDown);
        let state = failed(state, id, FetchErrorKind::Transport);
        assert_eq!(state.error(), Some(&NavigationError::DrilldownFailed));
        assert_eq!(
            state.error().unwrap().to_string(),
            "Failed to load detailed timeline. Please try again."
        );
        assert_eq!(state.stack().len(), 2);
        assert_eq!(state.context().cloned(), parent);

        // Back unwinds one level at a time
        let state = step(state, NavigationEvent::Back);
        assert_eq!(state.stack().len(), 1);
        assert_eq!(state.context().cloned(), parent);
        assert_eq!(state.status(), &Status::Ready);

        let state = step(state, NavigationEvent::Back);
        assert!(state.stack().is_empty());
        assert_eq!(state.context().unwrap().title(), "Paris");
    }

    #[test]
    fn load_failure_keeps_stack() {
        let state = drill(at_paris(), eiffel_events());
        let (state, id) = request(state, NavigationEvent::SelectLocation(seattle()));
        let state = failed(state, id, FetchErrorKind::Other);

        assert_eq!(state.error(), Some(&NavigationError::LoadFailed));
        assert_eq!(state.context(), None);
        assert_eq!(state.location(), Some(&seattle()));
        assert_eq!(state.stack().len(), 1);

        let state = step(state, NavigationEvent::Back);
        assert_eq!(state.context().unwrap().title(), "Paris");
        assert_eq!(state.location(), Some(&paris()));
    }

    #[test]
    fn not_found() {
        let (state, id) = request(
            NavigationState::default(),
            NavigationEvent::SelectLocation(Location::new("Nowhereville", 0.0, 0.0)),
        );
        let state = failed(state, id, FetchErrorKind::NotFound);
        assert_eq!(
            state.error().unwrap().to_string(),
            "No historical data for Nowhereville"
        );
        assert_eq!(state.context(), None);
    }

    #[test]
    fn new_location_resets_stack() {
        let state = drill(drill(at_paris(), eiffel_events()), eiffel_events());
        assert_eq!(state.stack().len(), 2);

        let (state, id) = request(state, NavigationEvent::SelectLocation(seattle()));
        // Still there while loading
        assert_eq!(state.stack().len(), 2);

        let state = loaded(state, id, vec![Event::new("1851", "Founded", "")]);
        assert!(state.stack().is_empty());
        assert_eq!(state.context().unwrap().title(), "Seattle");
        assert_eq!(state.location(), Some(&seattle()));
    }

    #[test]
    fn empty_timeline() {
        let (state, id) = request(NavigationState::default(), NavigationEvent::SelectLocation(paris()));
        let state = loaded(state, id, vec![]);
        assert_eq!(state.status(), &Status::Ready);
        let context = state.context().unwrap();
        assert!(context.is_empty());
        assert_eq!(context.selected_year(), None);
    }

    #[test]
    fn stale_timeline_is_discarded() {
        let (state, first) = request(NavigationState::default(), NavigationEvent::SelectLocation(seattle()));
        let (state, second) = request(state, NavigationEvent::SelectLocation(paris()));

        let state = loaded(state, first, vec![Event::new("1851", "Founded", "")]);
        assert!(matches!(state.status(), Status::Loading { location, .. } if location == &paris()));
        assert_eq!(state.context(), None);

        let state = loaded(state, second, paris_events());
        assert_eq!(state.context().unwrap().title(), "Paris");

        // A duplicate delivery changes nothing
        let before = state.clone();
        let state = loaded(state, second, vec![]);
        assert_eq!(state, before);
    }

    #[test]
    fn back_discards_pending_drilldown() {
        let state = drill(at_paris(), eiffel_events());
        let (state, id) = request(state, NavigationEvent::DrillDown);
        assert_eq!(state.stack().len(), 2);
        let state = step(state, NavigationEvent::Back);
        assert_eq!(state.stack().len(), 1);
        assert_eq!(state.context().unwrap().title(), "Eiffel Tower");
        assert_eq!(state.status(), &Status::Ready);

        let before = state.clone();
        let state = loaded(state, id, eiffel_events());
        assert_eq!(state, before);
    }

    #[test]
    fn ignored_while_pending() {
        let (state, _) = request(at_paris(), NavigationEvent::DrillDown);
        let before = state.clone();
        let state = step(state, NavigationEvent::SelectYear(Year::new(1969)));
        let state = step(state, NavigationEvent::ClearSelection);
        let state = step(state, NavigationEvent::DrillDown);
        assert_eq!(state, before);
    }

    #[test]
    fn search() {
        let (state, first) = request(NavigationState::default(), NavigationEvent::QueryChanged("Pa".to_string()));
        let (state, effect) = reduce(state, NavigationEvent::QueryChanged(" Par ".to_string()));
        let Some(Effect::Search { request: second, query }) = effect else {
            panic!("expected a search, got {effect:?}");
        };
        assert_eq!(query, "Par");
        assert_eq!(state.search().query(), " Par ");

        let state = step(
            state,
            NavigationEvent::SearchCompleted {
                request: second,
                results: vec![paris()],
            },
        );
        let state = step(
            state,
            NavigationEvent::SearchCompleted {
                request: first,
                results: vec![seattle()],
            },
        );
        assert_eq!(state.search().candidates(), &[paris()]);
        assert!(state.search().show_candidates());

        let state = step(state, NavigationEvent::DismissCandidates);
        assert!(!state.search().show_candidates());

        // Submitting picks the first candidate
        let (state, effect) = reduce(state, NavigationEvent::SubmitQuery);
        assert!(matches!(effect, Some(Effect::FetchEvents { location, .. }) if location == "Paris"));
        assert!(state.search().candidates().is_empty());
        assert_eq!(state.search().query(), "Paris");
    }

    #[test]
    fn blank_query() {
        let (state, id) = request(NavigationState::default(), NavigationEvent::QueryChanged("Pa".to_string()));
        let state = step(state, NavigationEvent::QueryChanged("   ".to_string()));
        let state = step(
            state,
            NavigationEvent::SearchCompleted {
                request: id,
                results: vec![paris()],
            },
        );
        assert!(state.search().candidates().is_empty());
        assert!(!state.search().show_candidates());

        // Nothing to submit
        let state = step(state, NavigationEvent::SubmitQuery);
        assert_eq!(state.status(), &Status::Idle);
    }

    #[test]
    fn submit_without_candidates_searches() {
        let state = NavigationState {
            search: SearchState {
                query: "Tokyo".to_string(),
                ..SearchState::default()
            },
            ..NavigationState::default()
        };
        let (_, effect) = reduce(state, NavigationEvent::SubmitQuery);
        assert!(matches!(effect, Some(Effect::Search { query, .. }) if query == "Tokyo"));
    }

    #[test]
    fn serialisable() {
        let state = drill(at_paris(), eiffel_events());
        let json = serde_json::to_string(&state).unwrap();
        let restored: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
