// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for information about the service itself
//!

use crate::{SERVICE_MESSAGE, SERVICE_NAME};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    service: &'static str,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    health: &'static str,
}

/// Handle a health check
pub async fn handle_get_health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Handle a request to the root
pub async fn handle_get_root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_MESSAGE,
        health: "/health",
    })
}
