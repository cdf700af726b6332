use crate::core::calendar::ConferenceCalendar;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Overrides the backend base URL (and the config file value).
pub const ENV_API_URL: &str = "CONFKIOSK_API_URL";
/// Overrides the configuration directory.
pub const ENV_HOME: &str = "CONFKIOSK_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    pub database: String,
    #[serde(default = "default_day_one")]
    pub conference_day_one: NaiveDate,
    #[serde(default = "default_day_two")]
    pub conference_day_two: NaiveDate,
    /// Local time the doors open on day one, used by the countdown.
    #[serde(default = "default_opening_time")]
    pub opening_time: NaiveTime,
    #[serde(default = "default_reset_delay_ms")]
    pub claim_reset_delay_ms: u64,
}

fn default_api_url() -> String {
    "http://localhost:5173/api".to_string()
}
fn default_timeout() -> u64 {
    crate::api::client::DEFAULT_TIMEOUT_SECS
}
fn default_day_one() -> NaiveDate {
    ConferenceCalendar::default().day_one
}
fn default_day_two() -> NaiveDate {
    ConferenceCalendar::default().day_two
}
fn default_opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}
fn default_reset_delay_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_url(),
            request_timeout_secs: default_timeout(),
            database: Self::database_file().to_string_lossy().to_string(),
            conference_day_one: default_day_one(),
            conference_day_two: default_day_two(),
            opening_time: default_opening_time(),
            claim_reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

impl Config {
    /// Return the configuration directory: `$CONFKIOSK_HOME`, or
    /// `~/.confkiosk` (`%APPDATA%\confkiosk` on Windows).
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(ENV_HOME) {
            if !custom.trim().is_empty() {
                return expand_tilde(&custom);
            }
        }
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("confkiosk")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".confkiosk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("confkiosk.conf")
    }

    /// Return the full path of the local SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("confkiosk.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist.
    /// `CONFKIOSK_API_URL` wins over the file.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                cfg.api_base_url = url.trim().to_string();
            }
        }
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.conference_day_two <= self.conference_day_one {
            return Err(AppError::Config(format!(
                "conference_day_two ({}) must come after conference_day_one ({})",
                self.conference_day_two, self.conference_day_one
            )));
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        Ok(())
    }

    pub fn calendar(&self) -> ConferenceCalendar {
        ConferenceCalendar::new(self.conference_day_one, self.conference_day_two)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.claim_reset_delay_ms)
    }

    /// Create the configuration directory and write the config file pointing
    /// at `database`. In test mode the config file is left untouched.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();

        if !is_test {
            let yaml = serde_yaml::to_string(self)?;
            fs::write(&path, yaml)?;
        }

        Ok(path)
    }
}
