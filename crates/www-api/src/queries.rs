// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All query parameter and request body structs
//!

use crate::ApiError;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use time_space_core::{Limit, MAX_EVENT_LIMIT};

/// `YYYY` or `YYYY-MM-DD`
static DRILLDOWN_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}(-\d{2}-\d{2})?$").expect("valid date pattern"));

/// Query parameters of `GET /locations/{location}/events`
#[derive(Deserialize, Debug)]
pub struct EventsQueryParams {
    #[serde(default)]
    pub limit: Limit,
}

/// Query parameters of `GET /locations/{location}/events/drilldown`
#[derive(Deserialize, Debug)]
pub struct DrilldownQueryParams {
    /// Date of the parent event
    pub date: String,

    /// Title of the parent event
    pub title: String,

    #[serde(default)]
    pub limit: Limit,
}

/// Body of `POST /query`
#[derive(Deserialize, Debug)]
pub struct LocationQuery {
    pub location: String,
}

pub fn validate_limit(limit: Limit) -> Result<Limit, ApiError> {
    if limit.is_valid() {
        Ok(limit)
    } else {
        Err(ApiError::unprocessable(format!(
            "limit must be between 1 and {MAX_EVENT_LIMIT} (got {})",
            limit.0
        )))
    }
}

pub fn validate_drilldown_date(date: &str) -> Result<&str, ApiError> {
    if DRILLDOWN_DATE.is_match(date) {
        Ok(date)
    } else {
        Err(ApiError::unprocessable(format!(
            "date must be in YYYY or YYYY-MM-DD format (got `{date}`)"
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn drilldown_dates() {
        for date in ["1889", "0476", "1889-03-31"] {
            assert!(validate_drilldown_date(date).is_ok(), "{date}");
        }
        for date in ["", "889", "June 1889", "1889-3-31", "1889-03", "1889-03-31T00:00"] {
            assert!(validate_drilldown_date(date).is_err(), "{date}");
        }
    }

    #[test]
    fn limits() {
        assert!(validate_limit(Limit(1)).is_ok());
        assert!(validate_limit(Limit(MAX_EVENT_LIMIT)).is_ok());
        assert!(validate_limit(Limit(0)).is_err());
        assert!(validate_limit(Limit(MAX_EVENT_LIMIT + 1)).is_err());
    }
}
