// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Time Space project*
//!
//! This crate provides the web API the explorer fetches its timelines from.
//! Events are served from a [`Catalogue`]: either the one bundled into the
//! binary or a JSON file with the same layout.
//!
//! - `GET /locations/{location}/events?limit=N`
//! - `GET /locations/{location}/events/drilldown?date=&title=&limit=N`
//! - `POST /query` with `{"location": ...}` (older clients)
//! - `GET /health` and `GET /`
//!

mod catalogue;
mod consts;
mod error;
mod handlers;
mod queries;

pub use catalogue::*;
use consts::*;
use error::*;
use queries::*;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[macro_use]
extern crate log;

/// Set up the API router for `catalogue`
pub fn prepare_api_router(catalogue: Catalogue) -> Router {
    handlers::router()
        .with_state(Arc::new(catalogue))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
