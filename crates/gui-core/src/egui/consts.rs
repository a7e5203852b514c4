// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub static CLEAR_BUTTON_WIDTH: f32 = 25.0;
pub static DRILL_DOWN_BUTTON_WIDTH: f32 = 110.0;

pub static BACK_SYMBOL: &str = "⬅";
pub static CLEAR_SYMBOL: &str = "❌";
pub static DRILL_DOWN_SYMBOL: &str = "🔍";
pub static ERROR_SYMBOL: &str = "⚠";
pub static PIN_SYMBOL: &str = "📍";
