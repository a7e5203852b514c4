// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Runs the effects asked for by [`crate::reduce`] and feeds their responses
//! back in
//!

use crate::{Effect, NavigationEvent, NavigationState, Snapshot, reduce};
use std::sync::Arc;
use time_space_client::{EventSource, LocationResolver};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Both halves of an unbounded channel, kept together
pub struct UnboundedChannel<T> {
    pub tx: UnboundedSender<T>,
    pub rx: UnboundedReceiver<T>,
}

impl<T> From<(UnboundedSender<T>, UnboundedReceiver<T>)> for UnboundedChannel<T> {
    fn from(value: (UnboundedSender<T>, UnboundedReceiver<T>)) -> Self {
        UnboundedChannel {
            tx: value.0,
            rx: value.1,
        }
    }
}

impl<T> UnboundedChannel<T> {
    pub fn new() -> Self {
        unbounded_channel().into()
    }
}

impl<T> Default for UnboundedChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the [`NavigationState`] and performs its I/O.
///
/// Each effect runs on its own tokio task (so [`Session::dispatch`] must be
/// called from within a tokio runtime) and its response comes back over a
/// channel, to be applied by [`Session::check_for_updates`] or
/// [`Session::settle`].  Stale responses are dropped by the reducer.
pub struct Session {
    state: NavigationState,
    resolver: Arc<dyn LocationResolver>,
    source: Arc<dyn EventSource>,

    /// Responses from spawned effects
    responses: UnboundedChannel<NavigationEvent>,

    /// Effects spawned whose response hasn't been applied yet
    in_flight: usize,
}

impl Session {
    pub fn new(
        state: NavigationState,
        resolver: Arc<dyn LocationResolver>,
        source: Arc<dyn EventSource>,
    ) -> Self {
        Self {
            state,
            resolver,
            source,
            responses: UnboundedChannel::new(),
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Apply `event` and start any effect it produces
    pub fn dispatch(&mut self, event: NavigationEvent) {
        let state = std::mem::take(&mut self.state);
        let (state, effect) = reduce(state, event);
        self.state = state;
        if let Some(effect) = effect {
            self.spawn(effect);
        }
    }

    fn spawn(&mut self, effect: Effect) {
        self.in_flight += 1;
        let tx = self.responses.tx.clone();
        match effect {
            Effect::Search { request, query } => {
                let resolver = Arc::clone(&self.resolver);
                tokio::spawn(async move {
                    let results = resolver.search(&query).await;
                    let _ = tx.send(NavigationEvent::SearchCompleted { request, results });
                });
            }
            Effect::FetchEvents {
                request,
                location,
                limit,
            } => {
                let source = Arc::clone(&self.source);
                tokio::spawn(async move {
                    let result = source
                        .events_for_location(&location, limit)
                        .await
                        .map_err(|error| error.kind());
                    let _ = tx.send(NavigationEvent::EventsLoaded { request, result });
                });
            }
            Effect::FetchDrilldown {
                request,
                location,
                date,
                title,
                limit,
            } => {
                let source = Arc::clone(&self.source);
                tokio::spawn(async move {
                    let result = source
                        .drilldown(&location, &date, &title, limit)
                        .await
                        .map_err(|error| error.kind());
                    let _ = tx.send(NavigationEvent::EventsLoaded { request, result });
                });
            }
        }
    }

    fn receive(&mut self, event: NavigationEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(event);
    }

    /// Apply every response that has arrived, without waiting
    pub fn check_for_updates(&mut self) {
        while let Ok(event) = self.responses.rx.try_recv() {
            self.receive(event);
        }
    }

    /// Whether any effect is still running
    pub fn waiting_for_updates(&self) -> bool {
        self.in_flight > 0
    }

    /// Wait for every running effect and apply its response
    pub async fn settle(&mut self) {
        while self.waiting_for_updates() {
            match self.responses.rx.recv().await {
                Some(event) => self.receive(event),
                None => break,
            }
        }
    }
}
