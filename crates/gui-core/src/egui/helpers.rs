// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Layout helpers
//!

use eframe::egui::Ui;

/// Layout helper function (shortcut for `ui.spacing().interact_size.y`)
pub fn body_text_height(ui: &mut Ui) -> f32 {
    ui.spacing().interact_size.y
}

