// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Free text to candidate places, via the Mapbox places endpoint.
//!
//! Search is advisory: every failure (including a missing access token) is
//! logged and turned into an empty result rather than being surfaced.
//!

use crate::{DEFAULT_GEOCODING_ENDPOINT, GEOCODING_RESULT_LIMIT, GeocodingError};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use time_space_core::Location;

/// Implementing types turn free text into a ranked list of candidate places
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Search for places matching `query`.  Never fails: an empty `Vec` is
    /// returned for a blank query and for any failure.
    async fn search(&self, query: &str) -> Vec<Location>;
}

/// The parts of a Mapbox geocoding response that are used
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

/// One Mapbox place
#[derive(Debug, Deserialize)]
struct Feature {
    /// e.g. "Paris, Île-de-France, France"
    place_name: String,

    /// `[longitude, latitude]`
    center: [f64; 2],
}

/// [`LocationResolver`] backed by the Mapbox places endpoint
#[derive(Debug, Clone)]
pub struct MapboxResolver {
    client: Client,
    access_token: Option<String>,
    endpoint: String,
}

impl MapboxResolver {
    /// Create a resolver for the public Mapbox endpoint
    pub fn new(access_token: Option<String>) -> Self {
        Self::with_endpoint(access_token, DEFAULT_GEOCODING_ENDPOINT)
    }

    /// Create a resolver for a different places endpoint (e.g. a proxy)
    pub fn with_endpoint<S: ToString>(access_token: Option<String>, endpoint: S) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.filter(|token| !token.trim().is_empty()),
            endpoint: endpoint.to_string(),
        }
    }

    /// `{endpoint}/{query}.json?access_token=..&types=place&limit=5&language=en`
    fn search_url(&self, query: &str, access_token: &str) -> Result<Url, GeocodingError> {
        let mut url =
            Url::parse(&self.endpoint).map_err(|_| GeocodingError::Url(self.endpoint.clone()))?;
        url.path_segments_mut()
            .map_err(|()| GeocodingError::Url(self.endpoint.clone()))?
            .pop_if_empty()
            .push(&format!("{query}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", access_token)
            .append_pair("types", "place")
            .append_pair("limit", &GEOCODING_RESULT_LIMIT.to_string())
            .append_pair("language", "en");
        Ok(url)
    }

    /// The fallible search
    async fn try_search(&self, query: &str) -> Result<Vec<Location>, GeocodingError> {
        let access_token = self
            .access_token
            .as_deref()
            .ok_or(GeocodingError::MissingAccessToken)?;
        let url = self.search_url(query, access_token)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        let collection: FeatureCollection = response.json().await?;
        Ok(collection
            .features
            .into_iter()
            .take(GEOCODING_RESULT_LIMIT)
            .map(location_from_feature)
            .collect())
    }
}

#[async_trait]
impl LocationResolver for MapboxResolver {
    async fn search(&self, query: &str) -> Vec<Location> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        match self.try_search(query).await {
            Ok(locations) => {
                debug!("Search for `{query}` found {} places", locations.len());
                locations
            }
            Err(error) => {
                error!("Failed to search for `{query}`: {error}");
                Vec::new()
            }
        }
    }
}

/// Build a [`Location`] from a Mapbox feature
fn location_from_feature(feature: Feature) -> Location {
    let [longitude, latitude] = feature.center;
    let (name, region, country) = split_place_name(&feature.place_name);
    Location::new(name, latitude, longitude)
        .with_region(region)
        .with_country(country)
        .with_full_name(Some(feature.place_name))
}

/// Split a comma separated display name into (place, region, country).
///
/// The first component is the place, the second the region, and the last the
/// country.  The region is dropped when it is the country.  A single
/// component is both the place and the country.
pub fn split_place_name(place_name: &str) -> (String, Option<String>, Option<String>) {
    let components: Vec<&str> = place_name.split(',').map(str::trim).collect();
    let name = components.first().copied().unwrap_or_default().to_string();
    let country = components.last().copied().unwrap_or_default();
    let region = components
        .get(1)
        .filter(|region| **region != country)
        .map(|region| region.to_string());
    (name, region, Some(country.to_string()))
}
