//! wavecmp core - frame-level comparison of two PCM tracks
//!
//! Toolkit-independent engine behind the `wavecmp` viewer: loading tracks,
//! per-frame aggregation, the overview and frame inspector views, cursor
//! navigation and pointer-anchored zoom.

pub mod audio_file;
pub mod config;
pub mod frames;
pub mod navigation;
pub mod plot;
pub mod session;
pub mod tables;
pub mod types;
pub mod views;
pub mod zoom;

pub use types::*;
