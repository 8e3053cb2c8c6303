//! Meteorological season onset detection.
//!
//! A season starts on the first day of the earliest run of
//! `SEASON_WINDOW_DAYS` consecutive entries in the chronological daily series
//! whose averages all satisfy the season's temperature rule.
//!
//! The window slides over *entries*, not calendar days. A sensor outage that
//! leaves dates out of the series is bridged, never filled: filling gaps would
//! move onset dates.

use chrono::NaiveDate;
use serde::Serialize;

use super::summary::daily_averages_chronological;
use crate::model::{DailyAverage, Location, Reading};

/// Number of consecutive daily entries that must satisfy the season rule.
pub const SEASON_WINDOW_DAYS: usize = 5;

/// Upper bound (°C, inclusive) of the autumn band.
pub const AUTUMN_MAX_TEMPERATURE: f64 = 10.0;

/// Boundary (°C) between autumn (strictly above) and winter (at or below).
pub const FREEZING_POINT: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Daily average in `(0, 10]`.
    Autumn,
    /// Daily average `<= 0`.
    Winter,
}

impl Season {
    /// Whether one day's average temperature fits this season.
    pub fn admits(&self, average_temperature: f64) -> bool {
        match self {
            Season::Autumn => {
                average_temperature > FREEZING_POINT && average_temperature <= AUTUMN_MAX_TEMPERATURE
            }
            Season::Winter => average_temperature <= FREEZING_POINT,
        }
    }
}

/// Result of scanning a series for a season onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeasonOnset {
    /// First date of the earliest qualifying window.
    Found { date: NaiveDate },
    /// The series is shorter than one window.
    InsufficientSeries { available: usize },
    /// Enough entries, but no window satisfied the rule.
    NoQualifyingWindow,
}

impl SeasonOnset {
    /// Collapses both "not found" outcomes into `None`.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            SeasonOnset::Found { date } => Some(*date),
            SeasonOnset::InsufficientSeries { .. } | SeasonOnset::NoQualifyingWindow => None,
        }
    }
}

/// Scans a chronological daily series for the earliest qualifying window.
///
/// `series` must be ordered by date ascending; the scan checks windows in
/// increasing start index and stops at the first full match.
pub fn find_season_onset(series: &[DailyAverage], season: Season) -> SeasonOnset {
    if series.len() < SEASON_WINDOW_DAYS {
        return SeasonOnset::InsufficientSeries {
            available: series.len(),
        };
    }

    series
        .windows(SEASON_WINDOW_DAYS)
        .find(|window| window.iter().all(|day| season.admits(day.average_temperature)))
        .map(|window| SeasonOnset::Found {
            date: window[0].date,
        })
        .unwrap_or(SeasonOnset::NoQualifyingWindow)
}

/// Builds the chronological series for `location` and scans it for `season`.
pub fn season_onset(readings: &[Reading], location: Location, season: Season) -> SeasonOnset {
    let series = daily_averages_chronological(readings, location);
    find_season_onset(&series, season)
}

/// First day of meteorological autumn at `location`, if the data shows one.
pub fn meteorological_autumn_onset(readings: &[Reading], location: Location) -> Option<NaiveDate> {
    season_onset(readings, location, Season::Autumn).date()
}

/// First day of meteorological winter at `location`, if the data shows one.
pub fn meteorological_winter_onset(readings: &[Reading], location: Location) -> Option<NaiveDate> {
    season_onset(readings, location, Season::Winter).date()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
