use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::state::Settings;

const APP_DIR: &str = "poem-narrator";
const SETTINGS_FILE: &str = "settings.json";
const STORAGE_FILE: &str = "local_storage.json";

/// Default settings location under the user's config directory
pub fn settings_path() -> Result<PathBuf> {
    let config = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    Ok(config.join(APP_DIR).join(SETTINGS_FILE))
}

/// Default local storage file under the user's data directory
pub fn storage_path() -> Result<PathBuf> {
    let data = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find data directory"))?;
    Ok(data.join(APP_DIR).join(STORAGE_FILE))
}

pub fn load_settings(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No stored settings found at {}. Using defaults.", path.display());
            return Settings::default();
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file {}: {}. Using defaults.", path.display(), e);
            return Settings::default();
        }
    };

    match serde_json::from_str::<Settings>(&data) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to deserialize stored settings: {}. Using defaults.", e);
            Settings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, data)?;
    Ok(())
}
