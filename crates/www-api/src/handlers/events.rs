// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for a location's events
//!

use crate::{
    ApiError, Catalogue, DrilldownQueryParams, EventsQueryParams, LocationQuery,
    validate_drilldown_date, validate_limit,
};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use std::sync::Arc;
use time_space_core::{EventsResponse, Limit};

fn events_for(
    catalogue: &Catalogue,
    location: &str,
    limit: Limit,
) -> Result<Json<EventsResponse>, ApiError> {
    info!("Events for {location} (limit {})", limit.0);
    match catalogue.events(location, limit) {
        Some(response) => Ok(Json(response)),
        None => {
            warn!("No events for {location}");
            Err(ApiError::not_found(format!("No events found for location '{location}'")))
        }
    }
}

/// Handle a request for the top-level timeline of a location
pub async fn handle_get_events(
    State(catalogue): State<Arc<Catalogue>>,
    Path(location): Path<String>,
    params: Result<Query<EventsQueryParams>, QueryRejection>,
) -> Result<Json<EventsResponse>, ApiError> {
    let Query(params) = params?;
    let limit = validate_limit(params.limit)?;
    events_for(&catalogue, &location, limit)
}

/// Handle a request for the timeline of one event of a location's timeline
pub async fn handle_get_drilldown(
    State(catalogue): State<Arc<Catalogue>>,
    Path(location): Path<String>,
    params: Result<Query<DrilldownQueryParams>, QueryRejection>,
) -> Result<Json<EventsResponse>, ApiError> {
    let Query(params) = params?;
    let limit = validate_limit(params.limit)?;
    let date = validate_drilldown_date(&params.date)?;
    info!("Drilling down into \"{}\" ({date}) in {location}", params.title);
    Ok(Json(catalogue.drilldown(&location, date, &params.title, limit)))
}

/// Handle the older `POST /query` form of [`handle_get_events`]
pub async fn handle_post_query(
    State(catalogue): State<Arc<Catalogue>>,
    body: Result<Json<LocationQuery>, JsonRejection>,
) -> Result<Json<EventsResponse>, ApiError> {
    let Json(query) = body?;
    events_for(&catalogue, &query.location, Limit::default())
}
