//! Viewer configuration
//!
//! Stored as YAML in the platform config directory.
//! Default location: `~/.config/wavecmp/config.yaml` on Linux.
//! Command line flags override values from the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use wavecmp_core::{DEFAULT_FRAME_SIZE, DEFAULT_ZOOM_BASE};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Samples per frame
    pub frame_size: usize,
    /// Circular shift of the decoded track's summary, in frames
    pub shift_frames: i64,
    /// Zoom factor per scroll step
    pub zoom_base: f64,
    /// Channel compared when the files have more than one
    pub channel: usize,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            shift_frames: 0,
            zoom_base: DEFAULT_ZOOM_BASE,
            channel: 0,
            window: WindowConfig::default(),
        }
    }
}

/// Initial window size in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
        }
    }
}

impl Config {
    /// Replace values that can't be used
    ///
    /// A zero frame size becomes 1; a zoom base that wouldn't zoom falls back
    /// to the default. Window dimensions are kept at a usable minimum.
    pub fn validate(&mut self) {
        if self.frame_size == 0 {
            log::warn!("validate: frame_size 0 is invalid, using 1");
            self.frame_size = 1;
        }
        if !(self.zoom_base > 1.0 && self.zoom_base.is_finite()) {
            log::warn!(
                "validate: zoom_base {} is invalid, using {}",
                self.zoom_base,
                DEFAULT_ZOOM_BASE
            );
            self.zoom_base = DEFAULT_ZOOM_BASE;
        }
        self.window.width = finite_or(self.window.width, WindowConfig::default().width).max(400.0);
        self.window.height = finite_or(self.window.height, WindowConfig::default().height).max(300.0);
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Default config file location
pub fn default_config_path() -> PathBuf {
    wavecmp_core::config::default_config_path("config.yaml")
}
