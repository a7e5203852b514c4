// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All handlers
//!

use crate::Catalogue;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

mod events;
mod service;

/// All routes, expecting the catalogue as state
pub fn router() -> Router<Arc<Catalogue>> {
    #[rustfmt::skip]
    let router = Router::new()
        .route("/locations/{location}/events",           get(events::handle_get_events))
        .route("/locations/{location}/events/drilldown", get(events::handle_get_drilldown))
        .route("/query",                                 post(events::handle_post_query))
        .route("/health",                                get(service::handle_get_health))
        .route("/",                                      get(service::handle_get_root));
    router
}
