// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Buttons used by the explorer
//!

use crate::{
    BACK_SYMBOL, CLEAR_BUTTON_WIDTH, CLEAR_SYMBOL, DRILL_DOWN_BUTTON_WIDTH, DRILL_DOWN_SYMBOL,
    body_text_height,
};
use eframe::egui::{self, Response, Ui};

/// The text of the button returning to the timeline titled `title`
pub fn back_button_text(title: &str) -> String {
    format!("{BACK_SYMBOL} Back to {title}")
}

/// Helpers for button drawing to an `egui` context
pub struct Button {}

impl Button {
    /// Draw the button for going back to the timeline titled `title` and
    /// return the response
    pub fn back(ui: &mut Ui, title: &str) -> Response {
        ui.button(back_button_text(title))
    }

    /// Draw the drill-down button and return the response
    pub fn drill_down(ui: &mut Ui, enabled: bool) -> Response {
        let button_height = body_text_height(ui);
        ui.add_enabled_ui(enabled, |ui| {
            ui.add_sized(
                [DRILL_DOWN_BUTTON_WIDTH, button_height],
                egui::Button::new(format!("{DRILL_DOWN_SYMBOL} Drill down")),
            )
        })
        .inner
    }

    /// Draw the clear button and return the response
    pub fn clear(ui: &mut Ui) -> Response {
        let button_height = body_text_height(ui);
        ui.add_sized(
            [CLEAR_BUTTON_WIDTH, button_height],
            egui::Button::new(CLEAR_SYMBOL),
        )
        .on_hover_text("Clear the selection")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn back_text() {
        assert_eq!(back_button_text("Paris"), "⬅ Back to Paris");
    }
}
