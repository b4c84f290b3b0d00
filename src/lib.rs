//! BitScope - decode and view data/clock bit captures
//!
//! This library parses timestamped data+clock logs recorded at a transmitter
//! and a receiver, decodes the data line into text, and provides a graphical
//! viewer that stacks both signal pairs on a shared time axis.
//!
//! ## Module Structure
//!
//! - [`parsers`] - Signal log parser and timestamp conversion
//! - [`decoder`] - MSB-first byte grouping and printable text mapping
//! - [`waveform`] - Step line expansion and level-at-time lookup
//! - [`config`] - Command line arguments and input file location
//! - [`error`] - Load error types
//! - [`logging`] - Tracing subscriber setup
//! - [`state`] - Captures, tracks, palettes and view preferences
//! - [`app`] - Main application state and eframe::App implementation
//! - [`ui`] - User interface components
//!   - `sidebar` - Capture summaries and view options
//!   - `chart` - Stacked track rendering
//!   - `timeline` - Cursor readout
//!   - `toast` - Toast notification system

pub mod app;
pub mod config;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod state;
pub mod ui;
pub mod waveform;
