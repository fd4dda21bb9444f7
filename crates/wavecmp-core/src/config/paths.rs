//! Standard locations for wavecmp configuration files

use std::path::PathBuf;

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "wavecmp";

/// Per-user config directory
///
/// Returns: `<config_dir>/wavecmp` (e.g. `~/.config/wavecmp` on Linux), or
/// `./wavecmp` when the platform has no config directory.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Default path of a config file inside [`config_dir`]
pub fn default_config_path(filename: &str) -> PathBuf {
    config_dir().join(filename)
}
