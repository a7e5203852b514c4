// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Fetching events for a location (and drilling down into one of them) from
//! the Time Space web API
//!

use crate::{EventSourceError, REQUEST_TIMEOUT_SECS};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use time_space_core::{EventsResponse, Limit};

/// Implementing types turn a location (or a location & one of its events) into
/// an ordered list of dated events.  Pure request/response: no state is kept
/// between calls.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// The top-level timeline for a location
    async fn events_for_location(
        &self,
        location: &str,
        limit: Limit,
    ) -> Result<EventsResponse, EventSourceError>;

    /// A finer grained timeline anchored at one event (identified by its date
    /// and title) of the location's timeline
    async fn drilldown(
        &self,
        location: &str,
        date: &str,
        title: &str,
        limit: Limit,
    ) -> Result<EventsResponse, EventSourceError>;
}

/// [`EventSource`] backed by the web API over HTTP
#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: Client,
    base_url: String,
}

impl HttpEventSource {
    /// Create a new `HttpEventSource` for the web API at `base_url` (e.g.
    /// `http://localhost:8000`)
    pub fn new<S: ToString>(base_url: S) -> Result<Self, EventSourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(EventSourceError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/locations/{location}/events[/drilldown]`, percent-encoded
    fn events_url(&self, location: &str, drilldown: bool) -> Result<Url, EventSourceError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| EventSourceError::Url(self.base_url.clone()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| EventSourceError::Url(self.base_url.clone()))?;
            segments
                .pop_if_empty()
                .extend(["locations", location, "events"]);
            if drilldown {
                segments.push("drilldown");
            }
        }
        Ok(url)
    }

    /// Send the request and map the outcome onto an [`EventSourceError`]
    async fn fetch(&self, url: Url, location: &str) -> Result<EventsResponse, EventSourceError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(EventSourceError::Transport)?;
        match response.status() {
            status if status.is_success() => {
                let body: EventsResponse =
                    response.json().await.map_err(EventSourceError::Decode)?;
                debug!(
                    "Fetched {} events for {}",
                    body.events.len(),
                    body.location.name
                );
                Ok(body)
            }
            StatusCode::NOT_FOUND => Err(EventSourceError::NotFound(location.to_string())),
            status => Err(EventSourceError::Status(status)),
        }
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn events_for_location(
        &self,
        location: &str,
        limit: Limit,
    ) -> Result<EventsResponse, EventSourceError> {
        let mut url = self.events_url(location, false)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.0.to_string());
        self.fetch(url, location).await.inspect_err(|error| {
            error!("Failed to fetch events for {location}: {error}");
        })
    }

    async fn drilldown(
        &self,
        location: &str,
        date: &str,
        title: &str,
        limit: Limit,
    ) -> Result<EventsResponse, EventSourceError> {
        let mut url = self.events_url(location, true)?;
        url.query_pairs_mut()
            .append_pair("date", date)
            .append_pair("title", title)
            .append_pair("limit", &limit.0.to_string());
        self.fetch(url, location).await.inspect_err(|error| {
            error!("Failed to fetch drill-down for {title} ({date}) in {location}: {error}");
        })
    }
}
