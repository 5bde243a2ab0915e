//! User settings for the `appshelf` binary.
//!
//! Stored at `~/.config/appshelf/settings.toml`. Every key is optional;
//! a missing file means all defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use appshelf_core::StoreLanguage;
use appshelf_import::{DEFAULT_APP_LIST_URL, FeedConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Canonical path to the settings file: `~/.config/appshelf/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("appshelf").join("settings.toml")
}

/// Default snapshot location: `<data_dir>/appshelf/database.json`.
pub(crate) fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("appshelf").join("database.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Snapshot file the store is loaded from and saved to.
    pub database: PathBuf,
    /// Local binary app-info cache read by `import-cache`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appinfo_cache: Option<PathBuf>,
    pub language: StoreLanguage,
    pub include_imputed_times: bool,
    pub fetch_timeout_secs: u64,
    pub app_list_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_times_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            appinfo_cache: None,
            language: StoreLanguage::default(),
            include_imputed_times: false,
            fetch_timeout_secs: 60,
            app_list_url: DEFAULT_APP_LIST_URL.to_string(),
            completion_times_url: None,
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }

    /// Write settings to `path` atomically, creating parent directories.
    pub(crate) fn save_to(&self, path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(io::Error::other)?;
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, &serialized)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub(crate) fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::config(e.to_string()))
    }

    pub(crate) fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            app_list_url: self.app_list_url.clone(),
            completion_times_url: self.completion_times_url.clone(),
            timeout: Duration::from_secs(self.fetch_timeout_secs.max(1)),
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
