/// Reading, DailyAverage, DailyHumidity, DailyMoldRisk, WeatherError
/// core data structures and error handling
///
/// Core data types for the indoor/outdoor weather statistics service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no analysis logic and no I/O — only types, plus the
/// conversions that resolve raw location tags once at ingestion.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Where a sensor is mounted. Raw tags are resolved to this enum once, at
/// ingestion, so the engine never compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Outdoor,
    Indoor,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Outdoor, Location::Indoor];

    /// Canonical tag, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Outdoor => "outdoor",
            Location::Indoor => "indoor",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = WeatherError;

    /// Accepts the English tags and the Swedish tags used by the logger
    /// export ("Ute" / "Inne"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outdoor" | "ute" => Ok(Location::Outdoor),
            "indoor" | "inne" => Ok(Location::Indoor),
            _ => Err(WeatherError::InvalidLocation(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A single temperature/humidity sample from one sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    /// Surrogate key assigned by the database. Ignored by the analysis engine.
    pub id: Option<i64>,
    pub location: Location,
    pub timestamp: NaiveDateTime,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
}

impl Reading {
    pub fn new(location: Location, timestamp: NaiveDateTime, temperature: f64, humidity: f64) -> Self {
        Self {
            id: None,
            location,
            timestamp,
            temperature,
            humidity,
        }
    }

    /// Calendar date of the reading; time of day is discarded.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

// ---------------------------------------------------------------------------
// Derived per-date records
// ---------------------------------------------------------------------------

/// Mean temperature of one location on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub average_temperature: f64,
}

/// Mean relative humidity of one location on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyHumidity {
    pub date: NaiveDate,
    pub average_humidity: f64,
}

/// Daily means plus the heuristic mold risk index derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyMoldRisk {
    pub date: NaiveDate,
    pub average_temperature: f64,
    pub average_humidity: f64,
    pub risk_index: f64,
}

/// Ordering requested for a ranked daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the collaborators around the analysis engine
/// (file import, configuration, database, report output).
///
/// The engine itself never returns these; absent results are `Option`s.
#[derive(Debug, PartialEq)]
pub enum WeatherError {
    /// Reading a file failed.
    Io(String),
    /// The configuration file could not be parsed.
    Config(String),
    /// A PostgreSQL call failed.
    Database(String),
    /// The report could not be serialized.
    Serialization(String),
    /// A location tag was not one of the known values.
    InvalidLocation(String),
    /// A user-supplied date could not be parsed.
    InvalidDate(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::Io(msg) => write!(f, "I/O error: {}", msg),
            WeatherError::Config(msg) => write!(f, "Config error: {}", msg),
            WeatherError::Database(msg) => write!(f, "Database error: {}", msg),
            WeatherError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            WeatherError::InvalidLocation(tag) => write!(f, "Unknown location tag: {}", tag),
            WeatherError::InvalidDate(input) => write!(f, "Invalid date (expected YYYY-MM-DD): {}", input),
        }
    }
}

impl std::error::Error for WeatherError {}

impl From<std::io::Error> for WeatherError {
    fn from(err: std::io::Error) -> Self {
        WeatherError::Io(err.to_string())
    }
}

impl From<postgres::Error> for WeatherError {
    fn from(err: postgres::Error) -> Self {
        WeatherError::Database(err.to_string())
    }
}

impl From<toml::de::Error> for WeatherError {
    fn from(err: toml::de::Error) -> Self {
        WeatherError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Serialization(err.to_string())
    }
}

/// Parses a `YYYY-MM-DD` date supplied by a user.
pub fn parse_date(input: &str) -> Result<NaiveDate, WeatherError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| WeatherError::InvalidDate(input.to_string()))
}
