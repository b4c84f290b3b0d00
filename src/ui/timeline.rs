//! Cursor readout bar: time and the level of every track.

use eframe::egui;

use crate::app::BitScopeApp;
use crate::waveform::format_time;

impl BitScopeApp {
    /// Render the time and per-track levels at the hovered or pinned cursor
    pub fn render_cursor_readout(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let Some(time) = self.readout_time() else {
                ui.label(
                    egui::RichText::new("Hover a track to inspect levels, click to pin")
                        .italics()
                        .color(egui::Color32::GRAY),
                );
                return;
            };

            ui.label(
                egui::RichText::new(format!("Time: {}", format_time(time)))
                    .strong()
                    .color(egui::Color32::from_rgb(0, 255, 255)), // Cyan to match cursor
            );

            for (track, level) in self.levels_at(time) {
                ui.separator();
                let color = self.prefs.track_color(track);
                let value = level.map_or_else(|| "-".to_string(), |l| l.to_string());
                ui.label(
                    egui::RichText::new(format!("{}: {}", track.label(), value))
                        .color(egui::Color32::from_rgb(color[0], color[1], color[2])),
                );
            }

            if self.cursor_time.is_some() {
                ui.separator();
                if ui.small_button("Clear cursor").clicked() {
                    self.cursor_time = None;
                }
            }
        });
    }
}
