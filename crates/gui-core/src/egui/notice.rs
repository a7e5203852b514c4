// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! One-line notices (loading, errors, empty results)
//!

use crate::{ERROR_SYMBOL, Label};
use eframe::egui::{Response, RichText, Ui};

/// Helpers for drawing notices to an `egui` context
pub struct Notice {}

impl Notice {
    /// Something is being fetched
    pub fn loading(ui: &mut Ui, text: &str) -> Response {
        ui.horizontal(|ui| {
            ui.spinner();
            Label::weak(ui, text)
        })
        .inner
    }

    /// Something failed.  `text` is shown to the user as is.
    pub fn error(ui: &mut Ui, text: &str) -> Response {
        let colour = ui.visuals().error_fg_color;
        ui.label(RichText::new(format!("{ERROR_SYMBOL} {text}")).color(colour))
    }

    /// Nothing went wrong but there is nothing to show
    pub fn info(ui: &mut Ui, text: &str) -> Response {
        ui.label(RichText::new(text).italics().weak())
    }
}
