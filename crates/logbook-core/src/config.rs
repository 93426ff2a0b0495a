use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Key under which the whole captain collection is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "captainsLogs";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// One of `none`, `alphabetical`, `days-since-last-crisis`, `log-date`.
    #[serde(default)]
    pub default_sort: Option<String>,
    /// One of `asc`, `desc`.
    #[serde(default)]
    pub default_order: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/logbook/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("logbook/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("logbook\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or unparsable files yield the default config.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    /// The configured data file, or `<data_dir>/logbook/logs.json`.
    pub fn effective_data_file(&self) -> Option<PathBuf> {
        self.data_file
            .clone()
            .or_else(|| dirs::data_dir().map(|data| data.join("logbook").join("logs.json")))
    }

    pub fn effective_default_sort(&self) -> &str {
        self.default_sort.as_deref().unwrap_or("none")
    }

    pub fn effective_default_order(&self) -> &str {
        self.default_order.as_deref().unwrap_or("asc")
    }
}
