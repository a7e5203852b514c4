// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The place search box and its suggestions
//!

use crate::consts::SEARCH_BOX_WIDTH;
use eframe::egui::{Context, Frame, Key, TextEdit, Ui};
use time_space_core::Location;
use time_space_gui_core::{Label, PIN_SYMBOL, View};
use time_space_navigation::{NavigationEvent, Snapshot};
use tokio::sync::mpsc::UnboundedSender;

/// How a suggestion is listed, e.g. "Paris, Île-de-France, France"
pub fn candidate_label(location: &Location) -> String {
    if let Some(full_name) = location.full_name() {
        return full_name.to_string();
    }
    let subtitle = location.subtitle();
    if subtitle.is_empty() {
        location.name().to_string()
    } else {
        format!("{}, {subtitle}", location.name())
    }
}

/// The search panel at the top of the main window
pub struct SearchGui {
    tx: UnboundedSender<NavigationEvent>,
}

impl SearchGui {
    pub fn new(tx: UnboundedSender<NavigationEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: NavigationEvent) {
        let _ = self.tx.send(event);
    }
}

impl View<Snapshot> for SearchGui {
    fn view(&mut self, _ctx: &Context, ui: &mut Ui, snapshot: &Snapshot) {
        // The navigation state owns the query, this is just this frame's copy
        let mut query = snapshot.query.clone();

        ui.horizontal(|ui| {
            Label::heading(ui, "Time Space");
            ui.separator();
            ui.label(PIN_SYMBOL);
            let input = ui.add(
                TextEdit::singleline(&mut query)
                    .desired_width(SEARCH_BOX_WIDTH)
                    .hint_text("Search for a place"),
            );
            if input.changed() {
                self.send(NavigationEvent::QueryChanged(query.clone()));
            }
            if input.lost_focus() {
                if ui.input(|i| i.key_pressed(Key::Enter)) {
                    self.send(NavigationEvent::SubmitQuery);
                } else if ui.input(|i| i.key_pressed(Key::Escape)) {
                    self.send(NavigationEvent::DismissCandidates);
                }
            }
        });

        if snapshot.show_candidates {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(SEARCH_BOX_WIDTH);
                for candidate in &snapshot.candidates {
                    if ui.selectable_label(false, candidate_label(candidate)).clicked() {
                        self.send(NavigationEvent::SelectLocation(candidate.clone()));
                    }
                }
            });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn candidate_labels() {
        let paris = Location::new("Paris", 48.8566, 2.3522)
            .with_region(Some("Île-de-France".to_string()))
            .with_country(Some("France".to_string()));
        assert_eq!(candidate_label(&paris), "Paris, Île-de-France, France");

        let geocoded = paris.with_full_name(Some("Paris, Île-de-France, France".to_string()));
        assert_eq!(candidate_label(&geocoded), "Paris, Île-de-France, France");

        let bare = Location::new("Atlantis", 0.0, 0.0);
        assert_eq!(candidate_label(&bare), "Atlantis");
    }
}
