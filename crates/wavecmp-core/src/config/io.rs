//! YAML config loading and saving for any serde config type

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Load a config from a YAML file
///
/// A missing file gives the default config. A file that can't be read or
/// parsed is logged and also gives the default, so a broken config never
/// prevents the comparison from opening.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: No config file, using defaults");
        return T::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("load_config: Failed to read {:?}: {}, using defaults", path, e);
            return T::default();
        }
    };

    match serde_yaml::from_str::<T>(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("load_config: Failed to parse {:?}: {}, using defaults", path, e);
            T::default()
        }
    }
}

/// Save a config as YAML, creating parent directories as needed
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct ViewerConfig {
        frame_size: usize,
        label: String,
    }

    impl Default for ViewerConfig {
        fn default() -> Self {
            Self {
                frame_size: 1152,
                label: "default".to_string(),
            }
        }
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config: ViewerConfig = load_config(Path::new("/nonexistent/wavecmp/config.yaml"));
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = ViewerConfig {
            frame_size: 576,
            label: "short blocks".to_string(),
        };
        save_config(&config, &path).unwrap();

        let loaded: ViewerConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "frame_size: 384\n").unwrap();

        let loaded: ViewerConfig = load_config(&path);
        assert_eq!(loaded.frame_size, 384);
        assert_eq!(loaded.label, "default");
    }

    #[test]
    fn test_invalid_yaml_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "frame_size: [not, a, number\n").unwrap();

        let loaded: ViewerConfig = load_config(&path);
        assert_eq!(loaded, ViewerConfig::default());
    }
}
