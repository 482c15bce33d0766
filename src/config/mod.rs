use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f32,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_source")]
    pub default_source: String,
}

fn default_match_threshold() -> f32 {
    crate::core::matcher::DEFAULT_MATCH_THRESHOLD
}
fn default_week_start() -> String {
    "sunday".to_string()
}
fn default_source() -> String {
    "cli".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            match_threshold: default_match_threshold(),
            week_start: default_week_start(),
            default_source: default_source(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("siteclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".siteclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("siteclock.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("siteclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A corrupt file falls back to defaults with a warning instead of
    /// taking the whole CLI down.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    crate::ui::messages::warning(format!(
                        "Failed to parse configuration file ({e}); using defaults"
                    ));
                    Config::default()
                }),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Persist the configuration as YAML.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Create the config directory, config file and database path.
    ///
    /// In test mode (`--test`) the user's config file is left untouched;
    /// only the database at the override path is initialized.
    pub fn init_all(custom_db: Option<String>, test_mode: bool) -> AppResult<()> {
        if test_mode {
            return Ok(());
        }

        let mut cfg = if Self::config_file().exists() {
            Self::load()
        } else {
            Config::default()
        };

        if let Some(db) = custom_db {
            cfg.database = db;
        }

        cfg.save()
    }

    /// Configured first day of week; unknown values fall back to Sunday,
    /// the original product's week arithmetic.
    pub fn week_start_weekday(&self) -> chrono::Weekday {
        crate::utils::date::parse_week_start(&self.week_start).unwrap_or(chrono::Weekday::Sun)
    }
}
