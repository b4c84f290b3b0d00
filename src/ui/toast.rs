//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::BitScopeApp;

/// Seconds a toast stays on screen
const TOAST_SECONDS: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Success => [113, 120, 78], // Olive green
            ToastType::Error => [135, 30, 28],    // Dark red
        }
    }
}

impl BitScopeApp {
    /// Render toast notifications in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some((message, time, toast_type)) = &self.toast_message else {
            return;
        };

        if time.elapsed().as_secs() >= TOAST_SECONDS {
            self.toast_message = None;
            return;
        }

        let bg_color = toast_type.color();
        let margin = 20.0;

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(bg_color[0], bg_color[1], bg_color[2]))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(message.as_str())
                                .color(egui::Color32::WHITE)
                                .size(14.0),
                        );
                    });
            });

        // Keep repainting so the toast disappears on time
        ctx.request_repaint();
    }
}
