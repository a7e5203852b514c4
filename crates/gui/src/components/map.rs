// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! A plain equirectangular map with a marker on the selected place
//!

use crate::consts::{GRATICULE_STEP_DEGREES, MARKER_RADIUS};
use eframe::egui::{
    Align2, Color32, Context, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use time_space_gui_core::View;
use time_space_navigation::Snapshot;

/// Where a point is drawn in `rect` (which spans 360° by 180°).  Values out
/// of range are clamped to the edge.
pub fn project(latitude: f64, longitude: f64, rect: Rect) -> Pos2 {
    let x = (longitude.clamp(-180.0, 180.0) + 180.0) / 360.0;
    let y = (90.0 - latitude.clamp(-90.0, 90.0)) / 180.0;
    Pos2::new(
        rect.left() + x as f32 * rect.width(),
        rect.top() + y as f32 * rect.height(),
    )
}

/// The largest 2:1 rect that fits in `available`, centred
pub fn map_rect(available: Rect) -> Rect {
    let width = available.width().min(available.height() * 2.0);
    Rect::from_center_size(available.center(), Vec2::new(width, width / 2.0))
}

/// The map in the centre of the main window
#[derive(Default)]
pub struct MapGui {}

impl View<Snapshot> for MapGui {
    fn view(&mut self, _ctx: &Context, ui: &mut Ui, snapshot: &Snapshot) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
        let rect = map_rect(response.rect);
        let visuals = ui.visuals();

        painter.rect(
            rect,
            0.0,
            visuals.extreme_bg_color,
            Stroke::new(1.0, visuals.weak_text_color()),
            StrokeKind::Inside,
        );

        // Graticule
        let grid = Stroke::new(0.5, visuals.weak_text_color().gamma_multiply(0.5));
        let mut latitude = -90.0 + GRATICULE_STEP_DEGREES;
        while latitude < 90.0 {
            painter.line_segment(
                [project(latitude, -180.0, rect), project(latitude, 180.0, rect)],
                grid,
            );
            latitude += GRATICULE_STEP_DEGREES;
        }
        let mut longitude = -180.0 + GRATICULE_STEP_DEGREES;
        while longitude < 180.0 {
            painter.line_segment(
                [project(90.0, longitude, rect), project(-90.0, longitude, rect)],
                grid,
            );
            longitude += GRATICULE_STEP_DEGREES;
        }

        match &snapshot.marker {
            Some(marker) => {
                let centre = project(marker.latitude, marker.longitude, rect);
                painter.circle(
                    centre,
                    MARKER_RADIUS,
                    Color32::from_rgb(220, 50, 47),
                    Stroke::new(1.5, Color32::WHITE),
                );
                painter.text(
                    centre + Vec2::new(MARKER_RADIUS * 1.5, -MARKER_RADIUS * 1.5),
                    Align2::LEFT_BOTTOM,
                    &marker.label,
                    FontId::proportional(14.0),
                    visuals.strong_text_color(),
                );
            }
            None => {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    "Search for a place to begin",
                    FontId::proportional(16.0),
                    visuals.weak_text_color(),
                );
            }
        }
    }
}
