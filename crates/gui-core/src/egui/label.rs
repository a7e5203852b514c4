// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Labels used by the explorer
//!

use eframe::egui::{self, Response, RichText, TextStyle, Ui};

/// Helpers for label drawing to an `egui` context
pub struct Label {}

impl Label {
    /// Draw a weak label and return the response (short for
    /// `ui.label(RichText::new(text).weak())`)
    pub fn weak(ui: &mut Ui, text: &str) -> Response {
        ui.label(RichText::new(text).weak())
    }

    /// Draw a heading label and return the response (short for
    /// `ui.heading(RichText::new(text))`)
    pub fn heading(ui: &mut Ui, text: &str) -> Response {
        ui.heading(RichText::new(text))
    }

    /// Draw a sub-heading (between body and heading size) and return the
    /// response
    pub fn sub_heading(ui: &mut Ui, text: &str) -> Response {
        let heading_size = ui.style().text_styles[&TextStyle::Heading].size;
        let body_size = ui.style().text_styles[&TextStyle::Body].size;
        let sub_heading_size = body_size + (heading_size - body_size) / 3.0;
        let sub_heading = ui.add(egui::Label::new(
            RichText::new(text).size(sub_heading_size).strong(),
        ));
        ui.add_space(3.0);
        sub_heading
    }

    /// Write wrapped body text (e.g. an event description)
    pub fn description(ui: &mut Ui, text: &str) -> Response {
        ui.add(egui::Label::new(text).wrap())
    }

    /// Draw a small, monospace tag such as an event category
    pub fn tag(ui: &mut Ui, text: &str) -> Response {
        ui.label(RichText::new(text.to_uppercase()).small().monospace().weak())
    }
}
