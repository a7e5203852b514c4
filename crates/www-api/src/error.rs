// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! API error response
//!

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body of every error response
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorMsg {
    pub error_msg: String,
}

/// Container for API errors.  Can be sent back to the client
pub struct ApiError(pub (StatusCode, Json<ErrorMsg>));

impl ApiError {
    fn new<S: ToString>(status: StatusCode, error_msg: S) -> Self {
        ApiError((
            status,
            Json(ErrorMsg {
                error_msg: error_msg.to_string(),
            }),
        ))
    }

    pub fn not_found<S: ToString>(error_msg: S) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_msg)
    }

    /// The request was understood but its parameters are invalid
    pub fn unprocessable<S: ToString>(error_msg: S) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, error_msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        ApiError::unprocessable(value.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        ApiError::unprocessable(value.body_text())
    }
}
