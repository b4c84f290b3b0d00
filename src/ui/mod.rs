//! UI rendering modules for the BitScope viewer.
//!
//! This module organizes the various UI components into logical submodules:
//! - `sidebar` - Capture summaries, decoded text and view options
//! - `chart` - Stacked step plots of the four signal tracks
//! - `timeline` - Cursor readout with per-track levels
//! - `toast` - Toast notification system

pub mod chart;
pub mod sidebar;
pub mod timeline;
pub mod toast;
