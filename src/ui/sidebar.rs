//! Sidebar UI rendering - capture details, decoded text and view options.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::BitScopeApp;
use crate::state::{LoadingState, Role};
use crate::waveform::format_time;

impl BitScopeApp {
    /// Render the left sidebar with capture summaries and view options
    pub fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.heading("Captures");
        ui.separator();

        let is_loading = matches!(self.loading_state, LoadingState::Loading);

        if is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Reloading...");
            });
            ui.separator();
        }

        for role in Role::iter() {
            self.render_capture_summary(ui, role);
            ui.add_space(10.0);
        }

        ui.separator();
        ui.add_space(5.0);

        ui.add_enabled_ui(!is_loading, |ui| {
            if ui.button("Reload files").clicked() {
                self.start_reload();
            }
        });

        ui.add_space(10.0);
        self.render_view_options(ui);
    }

    fn render_capture_summary(&self, ui: &mut egui::Ui, role: Role) {
        let capture = self.captures.get(role);

        ui.label(egui::RichText::new(format!("{} | {}", role, capture.name)).strong())
            .on_hover_text(capture.path.display().to_string());

        ui.indent(format!("capture_indent_{}", role), |ui| {
            let span = match capture.log.time_span() {
                Some((first, last)) => format!("{} - {}", format_time(first), format_time(last)),
                None => "no samples".to_string(),
            };
            ui.label(
                egui::RichText::new(format!("{} samples | {}", capture.log.len(), span))
                    .small()
                    .color(egui::Color32::GRAY),
            );

            if capture.decoded.is_empty() {
                ui.label(
                    egui::RichText::new("Fewer than 8 data bits, nothing decoded")
                        .italics()
                        .color(egui::Color32::GRAY),
                );
            } else {
                ui.label(egui::RichText::new(capture.decoded.as_str()).monospace());
                ui.label(
                    egui::RichText::new(capture.decoded.to_hex())
                        .monospace()
                        .small()
                        .color(egui::Color32::GRAY),
                );
            }
        });
    }

    fn render_view_options(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("View Options").strong());
        ui.checkbox(&mut self.prefs.show_decoded_text, "Show decoded text");
        ui.checkbox(&mut self.prefs.color_blind_mode, "Color blind palette");
        ui.add(egui::Slider::new(&mut self.prefs.line_width, 0.5..=4.0).text("Line width"));
    }
}
