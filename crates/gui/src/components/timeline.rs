// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The timeline row: back button, title, notices and one dot per year
//!

use crate::consts::{DOT_RADIUS, SELECTED_DOT_RADIUS, TIMELINE_HEIGHT};
use eframe::egui::{Align2, Color32, Context, FontId, Id, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use time_space_gui_core::{Button, Label, Notice, View};
use time_space_navigation::{Banner, NavigationEvent, Snapshot};
use tokio::sync::mpsc::UnboundedSender;

/// Horizontal positions of `count` evenly spaced dots across a row starting at
/// `left`, leaving half a gap at each end
pub fn dot_positions(count: usize, left: f32, width: f32) -> Vec<f32> {
    let gap = width / count as f32;
    (0..count)
        .map(|i| left + gap * (i as f32 + 0.5))
        .collect()
}

/// The timeline panel at the bottom of the main window
pub struct TimelineGui {
    tx: UnboundedSender<NavigationEvent>,
}

impl TimelineGui {
    pub fn new(tx: UnboundedSender<NavigationEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: NavigationEvent) {
        let _ = self.tx.send(event);
    }

    fn draw_header(&self, ui: &mut Ui, snapshot: &Snapshot) {
        ui.horizontal(|ui| {
            if let Some(parent) = &snapshot.back {
                if Button::back(ui, parent).clicked() {
                    self.send(NavigationEvent::Back);
                }
                ui.separator();
            }
            if let Some(title) = &snapshot.title {
                Label::sub_heading(ui, title);
            }
            if snapshot.depth > 0 {
                Label::weak(ui, &format!("(level {})", snapshot.depth + 1));
            }
        });

        match &snapshot.banner {
            Banner::None => (),
            Banner::Loading { location } => {
                Notice::loading(ui, &format!("Loading historical events for {location}…"));
            }
            Banner::DrillingDown { title } => {
                Notice::loading(ui, &format!("Loading details for {title}…"));
            }
            Banner::Error(message) => {
                Notice::error(ui, message);
            }
            Banner::Empty { location } => {
                Notice::info(ui, &format!("No historical events found for {location}"));
            }
        }
    }

    fn draw_dots(&self, ui: &mut Ui, snapshot: &Snapshot) {
        if snapshot.timeline.is_empty() {
            return;
        }
        let size = Vec2::new(ui.available_width(), TIMELINE_HEIGHT);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        let axis_y = rect.top() + rect.height() / 3.0;
        let visuals = ui.visuals().clone();

        painter.hline(
            rect.x_range(),
            axis_y,
            Stroke::new(2.0, visuals.weak_text_color()),
        );

        let xs = dot_positions(snapshot.timeline.len(), rect.left(), rect.width());
        for (i, (dot, x)) in snapshot.timeline.iter().zip(xs).enumerate() {
            let centre = Pos2::new(x, axis_y);
            let hit = Rect::from_center_size(centre, Vec2::splat(SELECTED_DOT_RADIUS * 2.5));
            let dot_response = ui
                .interact(hit, Id::new(("timeline-dot", i)), Sense::click())
                .on_hover_text(dot.year.to_string());

            let (radius, fill) = if dot.selected {
                (SELECTED_DOT_RADIUS, visuals.selection.bg_fill)
            } else if dot_response.hovered() {
                (SELECTED_DOT_RADIUS, visuals.widgets.hovered.bg_fill)
            } else {
                (DOT_RADIUS, visuals.widgets.inactive.bg_fill)
            };
            let stroke = if dot.active {
                Stroke::new(2.0, Color32::from_rgb(230, 160, 30))
            } else {
                Stroke::new(1.0, visuals.strong_text_color())
            };
            painter.circle(centre, radius, fill, stroke);
            painter.text(
                Pos2::new(x, axis_y + SELECTED_DOT_RADIUS + 4.0),
                Align2::CENTER_TOP,
                dot.year.to_string(),
                FontId::proportional(13.0),
                if dot.selected {
                    visuals.strong_text_color()
                } else {
                    visuals.text_color()
                },
            );

            if dot_response.clicked() {
                self.send(NavigationEvent::SelectYear(dot.year));
            }
        }
    }
}

impl View<Snapshot> for TimelineGui {
    fn view(&mut self, _ctx: &Context, ui: &mut Ui, snapshot: &Snapshot) {
        self.draw_header(ui, snapshot);
        self.draw_dots(ui, snapshot);
    }
}
