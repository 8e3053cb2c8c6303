//! Service configuration.
//!
//! Settings come from a small TOML file; every field has a default, so a
//! missing file or an empty one is valid. The database connection string is
//! read from `DATABASE_URL`, which `dotenv` may populate from a local `.env`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logging::{self, Component, LogLevel};
use crate::model::WeatherError;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "weather_stats.toml";

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Logger export to import when the database is empty (or when running
    /// without a database).
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
    /// Optional file that receives every log line in addition to stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub console_timestamps: bool,
    /// When false the CSV is analysed directly and PostgreSQL is never touched.
    #[serde(default = "default_use_database")]
    pub use_database: bool,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("TempFuktData.csv")
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

fn default_use_database() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            log_level: default_log_level(),
            log_file: None,
            console_timestamps: false,
            use_database: default_use_database(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, WeatherError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads the configuration file at `path`, falling back to defaults when
    /// the file does not exist. A file that exists but does not parse is an
    /// error.
    pub fn load(path: &Path) -> Result<Self, WeatherError> {
        if !path.exists() {
            logging::debug(
                Component::Config,
                None,
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Returns the connection string from `DATABASE_URL`, loading `.env` first.
pub fn database_url() -> Result<String, WeatherError> {
    dotenv::dotenv().ok();
    std::env::var(DATABASE_URL_VAR)
        .map_err(|_| WeatherError::Config(format!("{} must be set", DATABASE_URL_VAR)))
}
