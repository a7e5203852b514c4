// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Time Space egui desktop app
//!

use crate::Config;
use crate::components::{EventCardGui, MapGui, SearchGui, TimelineGui};
use crate::consts::{EVENT_CARD_WIDTH, REPAINT_INTERVAL_MS, TIMELINE_HEIGHT};
use eframe::App;
use eframe::egui::{CentralPanel, Context, SidePanel, TopBottomPanel};
use std::sync::Arc;
use std::time::Duration;
use time_space_client::{EventSourceError, HttpEventSource, MapboxResolver};
use time_space_gui_core::{CheckForUpdates, View};
use time_space_navigation::{NavigationEvent, NavigationState, Session, UnboundedChannel};

/// All data needed for the Time Space (egui) desktop app
pub struct TimeSpaceApp {
    /// The navigation state and the requests it has in flight
    session: Session,

    /// Navigation events raised by the panels while drawing, applied at the
    /// start of the next frame
    ui_events: UnboundedChannel<NavigationEvent>,

    search_gui: SearchGui,
    map_gui: MapGui,
    timeline_gui: TimelineGui,
    event_card_gui: EventCardGui,
}

impl TimeSpaceApp {
    /// Create a new `TimeSpaceApp` and start loading the configured initial
    /// location.  Must be called from within a tokio runtime.
    pub fn new(config: &Config) -> Result<Self, EventSourceError> {
        let resolver = MapboxResolver::new(config.mapbox_access_token().map(str::to_string));
        let source = HttpEventSource::new(config.api_base_url())?;
        info!("Using the web API at {}", source.base_url());

        let mut session = Session::new(
            NavigationState::new(config.event_limit()),
            Arc::new(resolver),
            Arc::new(source),
        );
        session.dispatch(NavigationEvent::SelectLocation(
            config.initial_location().clone(),
        ));

        let ui_events: UnboundedChannel<NavigationEvent> = UnboundedChannel::new();
        Ok(Self {
            session,
            search_gui: SearchGui::new(ui_events.tx.clone()),
            map_gui: MapGui::default(),
            timeline_gui: TimelineGui::new(ui_events.tx.clone()),
            event_card_gui: EventCardGui::new(ui_events.tx.clone()),
            ui_events,
        })
    }

    /// Apply everything the user did last frame
    fn dispatch_ui_events(&mut self) {
        while let Ok(event) = self.ui_events.rx.try_recv() {
            debug!("UI event: {event:?}");
            self.session.dispatch(event);
        }
    }
}

impl CheckForUpdates for TimeSpaceApp {
    fn check_for_updates(&mut self) {
        self.session.check_for_updates();
    }

    fn waiting_for_updates(&mut self) -> bool {
        self.session.waiting_for_updates()
    }
}

impl App for TimeSpaceApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.dispatch_ui_events();
        self.check_for_updates();
        if self.waiting_for_updates() {
            ctx.request_repaint_after(Duration::from_millis(REPAINT_INTERVAL_MS));
        }

        let snapshot = self.session.snapshot();

        TopBottomPanel::top("search").show(ctx, |ui| {
            self.search_gui.view(ctx, ui, &snapshot);
        });

        TopBottomPanel::bottom("timeline")
            .min_height(TIMELINE_HEIGHT * 1.5)
            .show(ctx, |ui| {
                self.timeline_gui.view(ctx, ui, &snapshot);
            });

        SidePanel::right("event")
            .default_width(EVENT_CARD_WIDTH)
            .show(ctx, |ui| {
                self.event_card_gui.view(ctx, ui, &snapshot);
            });

        CentralPanel::default().show(ctx, |ui| {
            self.map_gui.view(ctx, ui, &snapshot);
        });

        // Anything clicked this frame is applied straight away
        if !self.ui_events.rx.is_empty() {
            ctx.request_repaint();
        }
    }
}
