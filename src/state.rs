//! Core application state types and constants.
//!
//! This module contains the data structures shared by the viewer and the
//! headless decoder: a loaded capture, the four plotted tracks, palettes, and
//! persisted view preferences.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter};

use crate::config::InputPaths;
use crate::decoder::{decode, DecodedText};
use crate::error::LoadError;
use crate::parsers::{ParsedLog, SignalLog};

// ============================================================================
// Constants
// ============================================================================

/// Lower edge of the fixed y range (margin below level 0)
pub const Y_MIN: f64 = -0.2;

/// Upper edge of the fixed y range, leaving room for the decoded text
pub const Y_MAX: f64 = 1.45;

/// Height in plot units at which decoded text is anchored
pub const ANNOTATION_Y: f64 = 1.15;

/// Track colors: TX data, TX clock, RX data, RX clock
pub const TRACK_COLORS: &[[u8; 3]] = &[
    [71, 108, 155], // Blue (info)
    [253, 193, 73], // Amber (warning)
    [159, 166, 119], // Sage green (success)
    [191, 78, 48],  // Rust orange (accent)
];

/// Colorblind-friendly palette (based on Wong's optimized palette)
pub const COLORBLIND_COLORS: &[[u8; 3]] = &[
    [0, 114, 178],   // Blue
    [230, 159, 0],   // Orange
    [0, 158, 115],   // Bluish green
    [213, 94, 0],    // Vermillion
];

/// Color used for decoded text annotations
pub const ANNOTATION_COLOR: [u8; 3] = [100, 149, 237]; // Cornflower blue

// ============================================================================
// Core Types
// ============================================================================

/// Which end of the link a capture was recorded at
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Role {
    #[strum(serialize = "TX")]
    Transmitter,
    #[strum(serialize = "RX")]
    Receiver,
}

/// Signal line within a capture
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Data,
    Clock,
}

/// One of the four stacked tracks, top to bottom
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Track {
    TxData,
    TxClock,
    RxData,
    RxClock,
}

impl Track {
    pub fn role(&self) -> Role {
        match self {
            Track::TxData | Track::TxClock => Role::Transmitter,
            Track::RxData | Track::RxClock => Role::Receiver,
        }
    }

    pub fn line(&self) -> Line {
        match self {
            Track::TxData | Track::RxData => Line::Data,
            Track::TxClock | Track::RxClock => Line::Clock,
        }
    }

    /// Axis label, e.g. "TX Data"
    pub fn label(&self) -> String {
        format!("{} {}", self.role(), self.line())
    }

    /// Index into the track palettes
    pub fn color_index(&self) -> usize {
        match self {
            Track::TxData => 0,
            Track::TxClock => 1,
            Track::RxData => 2,
            Track::RxClock => 3,
        }
    }

    /// Levels for this track's line out of a capture
    pub fn levels<'a>(&self, capture: &'a Capture) -> &'a [u8] {
        match self.line() {
            Line::Data => capture.log.data(),
            Line::Clock => capture.log.clock(),
        }
    }
}

/// A loaded capture file with its parsed and decoded data
#[derive(Clone, Debug)]
pub struct Capture {
    pub role: Role,
    /// Path to the original file
    pub path: PathBuf,
    /// Display name for the file
    pub name: String,
    pub log: ParsedLog,
    /// Text decoded from the data line
    pub decoded: DecodedText,
}

impl Capture {
    /// Read, parse and decode one capture file
    pub fn load(role: Role, path: &Path) -> Result<Self, LoadError> {
        let log = SignalLog::parse_file(path)?;
        let decoded = decode(log.data());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        tracing::info!(
            "{} capture {}: {} samples, {} characters decoded",
            role,
            name,
            log.len(),
            decoded.len()
        );

        Ok(Self {
            role,
            path: path.to_path_buf(),
            name,
            log,
            decoded,
        })
    }
}

/// Transmitter and receiver captures, loaded independently
#[derive(Clone, Debug)]
pub struct CapturePair {
    pub transmitter: Capture,
    pub receiver: Capture,
}

impl CapturePair {
    /// Load both captures in parallel
    pub fn load(paths: &InputPaths) -> Result<Self, LoadError> {
        let (transmitter, receiver) = rayon::join(
            || Capture::load(Role::Transmitter, &paths.transmitter),
            || Capture::load(Role::Receiver, &paths.receiver),
        );

        Ok(Self {
            transmitter: transmitter?,
            receiver: receiver?,
        })
    }

    pub fn get(&self, role: Role) -> &Capture {
        match role {
            Role::Transmitter => &self.transmitter,
            Role::Receiver => &self.receiver,
        }
    }

    /// Earliest and latest sample time across both captures
    pub fn time_range(&self) -> Option<(f64, f64)> {
        [&self.transmitter, &self.receiver]
            .iter()
            .filter_map(|c| c.log.time_span())
            .fold(None, |acc, (first, last)| match acc {
                None => Some((first, last)),
                Some((min, max)) => Some((min.min(first), max.max(last))),
            })
    }
}

/// Viewer options persisted between runs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPreferences {
    pub color_blind_mode: bool,
    /// Draw decoded text above the data tracks
    pub show_decoded_text: bool,
    pub line_width: f32,
}

impl Default for ViewPreferences {
    fn default() -> Self {
        Self {
            color_blind_mode: false,
            show_decoded_text: true,
            line_width: 1.5,
        }
    }
}

impl ViewPreferences {
    pub fn track_color(&self, track: Track) -> [u8; 3] {
        let palette = if self.color_blind_mode {
            COLORBLIND_COLORS
        } else {
            TRACK_COLORS
        };
        palette[track.color_index() % palette.len()]
    }
}

/// Result from background reload operation
pub enum LoadResult {
    Success(Box<CapturePair>),
    Error(String),
}

/// Current state of file loading
pub enum LoadingState {
    /// No loading in progress
    Idle,
    /// Reloading the capture files
    Loading,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_track_order_and_labels() {
        let labels: Vec<String> = Track::iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["TX Data", "TX Clock", "RX Data", "RX Clock"]);
    }

    #[test]
    fn test_track_colors_are_distinct() {
        let prefs = ViewPreferences::default();
        let colors: Vec<[u8; 3]> = Track::iter().map(|t| prefs.track_color(t)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_load_missing_capture() {
        let result = Capture::load(Role::Receiver, Path::new("/nonexistent/Receiver.txt"));
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }
}
