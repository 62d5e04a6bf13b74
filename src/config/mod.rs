use crate::errors::{AppError, AppResult};
use crate::models::schedule::ScheduleInput;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

pub const DEFAULT_ARRIVAL: &str = "09:00";
pub const DEFAULT_WORK_DURATION: &str = "8.0";
pub const DEFAULT_LUNCH_BREAK: &str = "30";

/// Persisted settings: the three raw schedule inputs, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_arrival")]
    pub arrival: String,
    #[serde(default = "default_work_duration")]
    pub work_duration: String,
    #[serde(default = "default_lunch_break")]
    pub lunch_break: String,
}

fn default_arrival() -> String {
    DEFAULT_ARRIVAL.to_string()
}
fn default_work_duration() -> String {
    DEFAULT_WORK_DURATION.to_string()
}
fn default_lunch_break() -> String {
    DEFAULT_LUNCH_BREAK.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arrival: default_arrival(),
            work_duration: default_work_duration(),
            lunch_break: default_lunch_break(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdeparture")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdeparture")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdeparture.conf")
    }

    /// Load configuration from `path`.
    ///
    /// A missing, unreadable or malformed file is not an error: the
    /// hardcoded defaults are returned instead.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Self::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read configuration, using defaults");
                return Self::default();
            }
        };

        match Self::parse(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot parse configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn parse(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Write the configuration to `path`, creating parent directories.
    /// Values are written exactly as they are held.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "cannot create configuration file");
            AppError::ConfigSave
        })?;
        file.write_all(yaml.as_bytes())?;

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Create the configuration file with defaults unless it already exists.
    /// Returns `true` when a new file was written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<bool> {
        if is_test || path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    pub fn input(&self) -> ScheduleInput {
        ScheduleInput::new(&self.arrival, &self.work_duration, &self.lunch_break)
    }

    pub fn from_input(input: &ScheduleInput) -> Self {
        Self {
            arrival: input.arrival.clone(),
            work_duration: input.work_duration.clone(),
            lunch_break: input.lunch_break.clone(),
        }
    }
}
