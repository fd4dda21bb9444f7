//! Configuration file helpers
//!
//! The application owns its config struct; this module only knows where config
//! files live and how to read and write them as YAML.
//!
//! ```ignore
//! use wavecmp_core::config::{default_config_path, load_config};
//!
//! let config: MyConfig = load_config(&default_config_path("config.yaml"));
//! ```

mod io;
mod paths;

pub use io::{load_config, save_config};
pub use paths::{config_dir, default_config_path, APP_DIR_NAME};
