use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Plugin settings folder, relative to the local application-data directory.
const PLUGIN_DIR: [&str; 6] = [
    "Microsoft",
    "PowerToys",
    "PowerToys Run",
    "Settings",
    "Plugins",
    "Community.PowerToys.Run.Plugin.TimeTracker",
];

const DATA_FILE_NAME: &str = "data.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Explicit data-file location; the plugin folder is used when absent.
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,
    #[serde(default = "default_true")]
    pub pretty: bool,
    #[serde(default = "default_true")]
    pub pause_on_exit: bool,
}

fn default_backup_suffix() -> String {
    ".backup".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            backup_suffix: default_backup_suffix(),
            pretty: true,
            pause_on_exit: true,
        }
    }
}

impl Config {
    /// Directory holding this tool's own configuration.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timetracker-migrate")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("migrate.conf")
    }

    /// The TimeTracker plugin's settings folder
    /// (`%LOCALAPPDATA%\Microsoft\PowerToys\...` on Windows).
    pub fn plugin_data_dir() -> PathBuf {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        PLUGIN_DIR.iter().fold(base, |acc, part| acc.join(part))
    }

    pub fn default_data_file() -> PathBuf {
        Self::plugin_data_dir().join(DATA_FILE_NAME)
    }

    /// Load the default config file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        // An empty file parses as YAML null
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Data-file path: CLI argument, then config, then the plugin folder.
    pub fn resolve_data_file(&self, cli_path: Option<&str>) -> PathBuf {
        cli_path
            .or(self.data_file.as_deref())
            .map(expand_tilde)
            .unwrap_or_else(Self::default_data_file)
    }
}
