use crate::errors::{AppError, AppResult};
use crate::models::AgeGroup;
use crate::store::DEFAULT_LOG_FILE;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_age_group")]
    pub age_group: String,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_quick_add")]
    pub quick_add_ml: i64,
}

fn default_log_file() -> String {
    Config::log_file_default().to_string_lossy().to_string()
}
fn default_age_group() -> String {
    AgeGroup::default().code().to_string()
}
fn default_quick_add() -> i64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            age_group: default_age_group(),
            dark_mode: false,
            quick_add_ml: default_quick_add(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("waterbuddy")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".waterbuddy")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("waterbuddy.conf")
    }

    /// Return the default path of the daily log
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join(DEFAULT_LOG_FILE)
    }

    /// Resolved daily log path (`~/` expanded).
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Parsed age group; falls back to the default bracket for an unknown code.
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_code(&self.age_group).unwrap_or_default()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Create the configuration directory and write the config file.
    /// Returns the resolved log path.
    pub fn init_all(custom_log: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Existing settings survive a second `init`.
        let mut config = Self::load().unwrap_or_default();

        if let Some(name) = custom_log {
            let p = expand_tilde(&name);
            let log_path = if p.is_absolute() {
                p
            } else {
                env::current_dir()?.join(p)
            };
            config.log_file = log_path.to_string_lossy().to_string();
        }

        if !is_test {
            config.save()?;
        }

        Ok(config.log_path())
    }
}
