// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The card describing the selected event
//!

use eframe::egui::{Context, ScrollArea, Ui};
use time_space_gui_core::{Button, Label, Notice, View};
use time_space_navigation::{NavigationEvent, Snapshot};
use tokio::sync::mpsc::UnboundedSender;

/// The event panel at the side of the main window
pub struct EventCardGui {
    tx: UnboundedSender<NavigationEvent>,
}

impl EventCardGui {
    pub fn new(tx: UnboundedSender<NavigationEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: NavigationEvent) {
        let _ = self.tx.send(event);
    }
}

impl View<Snapshot> for EventCardGui {
    fn view(&mut self, _ctx: &Context, ui: &mut Ui, snapshot: &Snapshot) {
        let Some(detail) = &snapshot.detail else {
            if !snapshot.timeline.is_empty() {
                Notice::info(ui, "Select a year on the timeline");
            }
            return;
        };

        Label::sub_heading(ui, &detail.title);
        ui.horizontal(|ui| {
            Label::weak(ui, &detail.date);
            if let Some(category) = &detail.category {
                Label::tag(ui, category);
            }
        });
        ui.separator();

        ui.horizontal(|ui| {
            if Button::drill_down(ui, detail.can_drill_down)
                .on_hover_text("Explore this event in more detail")
                .clicked()
            {
                self.send(NavigationEvent::DrillDown);
            }
            if Button::clear(ui).clicked() {
                self.send(NavigationEvent::ClearSelection);
            }
        });
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            Label::description(ui, &detail.description);
        });
    }
}
