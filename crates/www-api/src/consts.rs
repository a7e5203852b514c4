// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API consts
//!

pub const SERVICE_NAME: &str = "Time Space API";
pub const SERVICE_MESSAGE: &str = "Time Space API - Interactive History Map";

/// Given to drill-down events the catalogue knows nothing about
pub const FALLBACK_CATEGORY: &str = "historical";
