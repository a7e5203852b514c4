// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Drawing a model to an egui context
//!

use eframe::egui::{Context, Ui};

/// Implementing types draw a `T` (that they don't own) to an egui context.
/// Any user interaction is reported by the implementing type itself (e.g.
/// over a channel), never by mutating the model.
pub trait View<T> {
    fn view(&mut self, ctx: &Context, ui: &mut Ui, model: &T);
}
