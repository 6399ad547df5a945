//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
        .join("order-desk");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON config file, falling back to the default when absent
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    read_config_file(&app_data_dir()?.join(filename))
}

/// Save a JSON config file
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    write_config_file(&app_data_dir()?.join(filename), config)
}

fn read_config_file<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

fn write_config_file<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UiConfig;

    #[test]
    fn test_missing_file_yields_default() {
        let path = std::env::temp_dir().join("order-desk-test-missing.json");
        let _ = fs::remove_file(&path);
        let config: UiConfig = read_config_file(&path).expect("read");
        assert!((config.nav_split - UiConfig::default().nav_split).abs() < f32::EPSILON);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let path = std::env::temp_dir().join("order-desk-test-roundtrip.json");
        let config = UiConfig {
            window_width: 1024.0,
            window_height: 700.0,
            nav_split: 0.42,
        };
        write_config_file(&path, &config).expect("write");
        let back: UiConfig = read_config_file(&path).expect("read");
        assert!((back.window_width - 1024.0).abs() < f32::EPSILON);
        assert!((back.nav_split - 0.42).abs() < f32::EPSILON);
        let _ = fs::remove_file(&path);
    }
}
