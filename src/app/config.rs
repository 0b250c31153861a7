//! Settings file loading for the command-line front end.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{AppError, LoaderConfig, Settings};

/// Contents of a settings file: credentials plus optional transport options
/// under `loader`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsFile {
    #[serde(flatten)]
    pub settings: Settings,
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Load a settings file. `.toml` files are read as TOML; anything else
/// (`.yaml`, `.yml`, `.json`) as YAML.
pub fn load_settings(path: &Path) -> Result<SettingsFile, AppError> {
    if !path.is_file() {
        return Err(AppError::SettingsMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    parse_settings_content(&content, path)
}

/// Parse settings content, choosing the syntax from the extension of `path`.
pub fn parse_settings_content(content: &str, path: &Path) -> Result<SettingsFile, AppError> {
    let is_toml = path.extension().and_then(|ext| ext.to_str()) == Some("toml");
    let parse_error = |reason: String| AppError::SettingsParse {
        path: path.display().to_string(),
        reason,
    };

    if is_toml {
        toml::from_str(content).map_err(|e| parse_error(e.to_string()))
    } else if content.trim().is_empty() {
        Ok(SettingsFile::default())
    } else {
        serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
    }
}
