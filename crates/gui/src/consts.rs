// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 1100.0,
    height: 750.0,
};

/// How often to redraw while waiting on a request
pub const REPAINT_INTERVAL_MS: u64 = 100;

pub const SEARCH_BOX_WIDTH: f32 = 320.0;
pub const EVENT_CARD_WIDTH: f32 = 300.0;

pub const TIMELINE_HEIGHT: f32 = 70.0;
pub const DOT_RADIUS: f32 = 6.0;
pub const SELECTED_DOT_RADIUS: f32 = 9.0;

pub const MARKER_RADIUS: f32 = 6.0;

/// Spacing of the map's latitude & longitude lines
pub const GRATICULE_STEP_DEGREES: f64 = 30.0;
