//! Stacked step-plot rendering of the four signal tracks.

use eframe::egui;
use egui_plot::{GridMark, Line, Plot, PlotPoint, PlotPoints, Text, VLine};
use std::ops::RangeInclusive;
use strum::IntoEnumIterator;

use crate::app::BitScopeApp;
use crate::state::{self, Capture, Track, ANNOTATION_COLOR, ANNOTATION_Y, Y_MAX, Y_MIN};

/// Vertical gap between stacked tracks
const TRACK_SPACING: f32 = 4.0;

/// Smallest height a track is squeezed to
const MIN_TRACK_HEIGHT: f32 = 60.0;

/// Only the two binary levels get a y tick label
fn binary_tick(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    if mark.value == 0.0 {
        "0".to_string()
    } else if mark.value == 1.0 {
        "1".to_string()
    } else {
        String::new()
    }
}

/// Decoded-text label and the x it is drawn at: the first sample, or 0 for
/// an empty capture
fn decoded_annotation(capture: &Capture) -> (f64, String) {
    let x = capture.log.time_span().map_or(0.0, |(first, _)| first);
    (x, format!("{} ASCII: {}", capture.role, capture.decoded))
}

impl BitScopeApp {
    /// Render TX data, TX clock, RX data, RX clock on a shared time axis
    pub fn render_chart(&mut self, ui: &mut egui::Ui) {
        let track_count = Track::iter().count() as f32;
        let track_height = ((ui.available_height() - TRACK_SPACING * (track_count - 1.0))
            / track_count)
            .max(MIN_TRACK_HEIGHT);

        let link_group = egui::Id::new("signal_tracks");
        let prefs = self.prefs.clone();
        let cursor_time = self.cursor_time;

        let mut hovered: Option<f64> = None;
        let mut clicked: Option<f64> = None;

        for track in Track::iter() {
            let is_bottom = track == Track::RxClock;
            let capture = self.captures.get(track.role());
            let color = prefs.track_color(track);

            let annotation = (prefs.show_decoded_text && track.line() == state::Line::Data)
                .then(|| decoded_annotation(capture));

            let mut plot = Plot::new(("signal_track", track.color_index()))
                .height(track_height)
                .link_axis(link_group, [true, false])
                .link_cursor(link_group, [true, false])
                .default_y_bounds(Y_MIN, Y_MAX)
                .allow_zoom([true, false])
                .allow_drag([true, false])
                .allow_scroll([true, false])
                .show_grid(true)
                .show_axes([is_bottom, true])
                .y_axis_label(track.label())
                .y_axis_formatter(binary_tick);

            if is_bottom {
                plot = plot.x_axis_label("Time (seconds)");
            }

            let points = self.track_points.get(&track);

            let response = plot.show(ui, |plot_ui| {
                if let Some(points) = points {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(
                        Line::new(track.label(), plot_points)
                            .color(egui::Color32::from_rgb(color[0], color[1], color[2]))
                            .width(prefs.line_width),
                    );
                }

                if let Some((x, text)) = &annotation {
                    plot_ui.text(
                        Text::new(
                            "decoded",
                            PlotPoint::new(*x, ANNOTATION_Y),
                            egui::RichText::new(text).monospace().color(egui::Color32::from_rgb(
                                ANNOTATION_COLOR[0],
                                ANNOTATION_COLOR[1],
                                ANNOTATION_COLOR[2],
                            )),
                        )
                        .anchor(egui::Align2::LEFT_BOTTOM),
                    );
                }

                // Pinned cursor
                if let Some(time) = cursor_time {
                    plot_ui.vline(
                        VLine::new("Cursor", time)
                            .color(egui::Color32::from_rgb(0, 255, 255))
                            .width(1.0),
                    );
                }

                // Return pointer position if hovering for click detection
                plot_ui.pointer_coordinate()
            });

            if response.response.hovered() {
                hovered = response.inner.map(|pos| pos.x);
            }
            if response.response.clicked() {
                clicked = response.inner.map(|pos| pos.x);
            }

            if !is_bottom {
                ui.add_space(TRACK_SPACING);
            }
        }

        self.hover_time = hovered;
        if let Some(time) = clicked {
            self.cursor_time = Some(time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode;
    use crate::parsers::SignalLog;
    use crate::state::Role;
    use std::path::PathBuf;

    fn capture(role: Role, contents: &str) -> Capture {
        let log = SignalLog::parse(contents);
        let decoded = decode(log.data());
        Capture {
            role,
            path: PathBuf::from("capture.txt"),
            name: "capture.txt".to_string(),
            log,
            decoded,
        }
    }

    #[test]
    fn test_binary_tick() {
        let range = -0.2..=1.45;
        let mark = |value| GridMark {
            value,
            step_size: 0.5,
        };

        assert_eq!(binary_tick(mark(0.0), &range), "0");
        assert_eq!(binary_tick(mark(1.0), &range), "1");
        assert_eq!(binary_tick(mark(0.5), &range), "");
    }

    #[test]
    fn test_decoded_annotation_at_first_sample() {
        let bits = "00:00:05 -> 0 0\n00:00:06 -> 1 1\n00:00:07 -> 0 0\n00:00:08 -> 0 1\n\
                    00:00:09 -> 1 0\n00:00:10 -> 0 1\n00:00:11 -> 0 0\n00:00:12 -> 0 1\n";
        let (x, text) = decoded_annotation(&capture(Role::Receiver, bits));
        assert_eq!(x, 5.0);
        assert_eq!(text, "RX ASCII: H");
    }

    #[test]
    fn test_decoded_annotation_for_empty_capture() {
        let (x, text) = decoded_annotation(&capture(Role::Transmitter, "garbage\n"));
        assert_eq!(x, 0.0);
        assert_eq!(text, "TX ASCII: ");
    }
}
