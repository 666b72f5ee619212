use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::theme::{THEME_ENV, Theme};

/// Overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "CITYBOARD_CONFIG";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// theme = "dark"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Saved theme preference, if the user ever picked one. Unrecognised
    /// values read as unset.
    #[serde(default, deserialize_with = "lenient_theme")]
    pub theme: Option<Theme>,
}

fn lenient_theme<'de, D>(deserializer: D) -> Result<Option<Theme>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<toml::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match value.as_str().map(str::parse::<Theme>) {
        Some(Ok(theme)) => Ok(Some(theme)),
        _ => {
            warn!(%value, "ignoring unrecognised saved theme");
            Ok(None)
        }
    }
}

impl Config {
    /// Load config from the default location, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the default location, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self)
            .context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file; `CITYBOARD_CONFIG` wins over the platform default.
    pub fn config_file_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("dev", "cityboard", "cityboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// API key to use: `OPENWEATHER_API_KEY` if set, otherwise the stored one.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with_override(env::var(API_KEY_ENV).ok())
    }

    pub fn api_key_with_override(&self, env_key: Option<String>) -> Option<String> {
        env_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
    }

    /// Effective theme: saved value, then `CITYBOARD_THEME`, then light.
    pub fn theme(&self) -> Theme {
        Theme::resolve(self.theme, env::var(THEME_ENV).ok().as_deref())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}
