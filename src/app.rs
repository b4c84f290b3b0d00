//! Main application state and eframe::App implementation.

use eframe::egui;
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Instant;
use strum::IntoEnumIterator;

use crate::config::InputPaths;
use crate::state::{CapturePair, LoadResult, LoadingState, Track, ViewPreferences};
use crate::ui::toast::ToastType;
use crate::waveform::{level_at, step_points};

/// Main application state
pub struct BitScopeApp {
    /// Transmitter and receiver captures currently shown
    pub(crate) captures: CapturePair,
    /// Where the captures were loaded from, reused by reload
    pub(crate) paths: InputPaths,
    /// Persisted view options
    pub(crate) prefs: ViewPreferences,
    /// Step-expanded points per track, rebuilt when captures change
    pub(crate) track_points: HashMap<Track, Vec<[f64; 2]>>,
    /// Toast messages for user feedback
    pub(crate) toast_message: Option<(String, Instant, ToastType)>,
    /// Channel for receiving reloaded captures from background thread
    load_receiver: Option<Receiver<LoadResult>>,
    /// Current loading state
    pub(crate) loading_state: LoadingState,
    /// Time under the pointer on any track
    pub(crate) hover_time: Option<f64>,
    /// Time pinned by clicking a track
    pub(crate) cursor_time: Option<f64>,
}

impl BitScopeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, captures: CapturePair, paths: InputPaths) -> Self {
        let prefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_preferences(captures, paths, prefs)
    }

    pub fn with_preferences(
        captures: CapturePair,
        paths: InputPaths,
        prefs: ViewPreferences,
    ) -> Self {
        let mut app = Self {
            captures,
            paths,
            prefs,
            track_points: HashMap::new(),
            toast_message: None,
            load_receiver: None,
            loading_state: LoadingState::Idle,
            hover_time: None,
            cursor_time: None,
        };
        app.rebuild_track_points();
        app
    }

    /// Recompute the step lines for all four tracks
    fn rebuild_track_points(&mut self) {
        self.track_points = Track::iter()
            .map(|track| {
                let capture = self.captures.get(track.role());
                let points = step_points(capture.log.times(), track.levels(capture));
                (track, points)
            })
            .collect();
    }

    /// Re-read both capture files in the background
    pub fn start_reload(&mut self) {
        if matches!(self.loading_state, LoadingState::Loading) {
            return;
        }

        self.loading_state = LoadingState::Loading;

        let (sender, receiver): (Sender<LoadResult>, Receiver<LoadResult>) = channel();
        self.load_receiver = Some(receiver);

        let paths = self.paths.clone();
        thread::spawn(move || {
            let result = match CapturePair::load(&paths) {
                Ok(pair) => LoadResult::Success(Box::new(pair)),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = sender.send(result);
        });
    }

    /// Check for a completed background reload
    fn check_loading_complete(&mut self) {
        let Some(receiver) = &self.load_receiver else {
            return;
        };

        if let Ok(result) = receiver.try_recv() {
            match result {
                LoadResult::Success(pair) => {
                    self.captures = *pair;
                    self.rebuild_track_points();
                    self.show_toast("Captures reloaded", ToastType::Success);
                }
                LoadResult::Error(e) => {
                    tracing::warn!("Reload failed: {}", e);
                    self.show_toast(&format!("Reload failed: {}", e), ToastType::Error);
                }
            }
            self.load_receiver = None;
            self.loading_state = LoadingState::Idle;
        }
    }

    /// Show a toast message
    pub(crate) fn show_toast(&mut self, message: &str, toast_type: ToastType) {
        self.toast_message = Some((message.to_string(), Instant::now(), toast_type));
    }

    /// Time the readout should describe: hover first, then the pinned cursor
    pub fn readout_time(&self) -> Option<f64> {
        self.hover_time.or(self.cursor_time)
    }

    /// Level of every track at `time`
    pub fn levels_at(&self, time: f64) -> Vec<(Track, Option<u8>)> {
        Track::iter()
            .map(|track| {
                let capture = self.captures.get(track.role());
                let level = level_at(capture.log.times(), track.levels(capture), time);
                (track, level)
            })
            .collect()
    }
}

impl eframe::App for BitScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background loads
        self.check_loading_complete();

        // Apply dark theme
        ctx.set_visuals(egui::Visuals::dark());

        // Request repaint while loading (for spinner animation)
        if matches!(self.loading_state, LoadingState::Loading) {
            ctx.request_repaint();
        }

        // Toast notifications
        self.render_toast(ctx);

        // Left sidebar panel
        egui::SidePanel::left("captures_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_sidebar(ui);
            });

        // Bottom panel for the cursor readout (render before central to claim space)
        egui::TopBottomPanel::bottom("readout_panel")
            .resizable(false)
            .min_height(32.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_cursor_readout(ui);
                ui.add_space(4.0);
            });

        // Stacked tracks take remaining space
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_chart(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }
}
