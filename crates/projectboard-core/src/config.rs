use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Limits the input form and the seed loader apply before any project
/// reaches the store. The store itself never validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_people_min")]
    pub people_min: u32,
    #[serde(default = "default_people_max")]
    pub people_max: u32,
    #[serde(default = "default_description_min_len")]
    pub description_min_len: usize,
}

fn default_people_min() -> u32 {
    1
}

fn default_people_max() -> u32 {
    5
}

fn default_description_min_len() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            people_min: default_people_min(),
            people_max: default_people_max(),
            description_min_len: default_description_min_len(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/projectboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("projectboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("projectboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// A missing or unreadable file falls back to defaults; a present but
    /// malformed file does too. The board must come up either way.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn people_range(&self) -> std::ops::RangeInclusive<u32> {
        self.people_min..=self.people_max
    }
}
