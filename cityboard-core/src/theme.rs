use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Environment variable consulted when no theme has been saved yet.
pub const THEME_ENV: &str = "CITYBOARD_THEME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Saved preference first, then a valid `CITYBOARD_THEME` value, then light.
    pub fn resolve(saved: Option<Theme>, env_value: Option<&str>) -> Self {
        saved
            .or_else(|| env_value.and_then(|v| v.parse().ok()))
            .unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow::anyhow!(
                "Unknown theme '{s}'. Supported themes: light, dark."
            )),
        }
    }
}
