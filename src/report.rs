//! Presentation layer: gathers the analysis queries for one location into a
//! report and renders it as aligned text or JSON.
//!
//! All formatting lives here; the analysis engine returns raw numbers.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

use crate::analysis::{self, Season, SeasonOnset};
use crate::model::{DailyAverage, DailyHumidity, DailyMoldRisk, Location, Reading, SortDirection, WeatherError};

const DATE_FMT: &str = "%Y-%m-%d";

/// Average for the date the caller asked about. `average_temperature` is
/// `None` when no reading at that location falls on `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateQuery {
    pub date: NaiveDate,
    pub average_temperature: Option<f64>,
    pub average_humidity: Option<f64>,
}

/// Every derived series for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReport {
    pub location: Location,
    pub date_query: Option<DateQuery>,
    /// Warmest first.
    pub warmest_days: Vec<DailyAverage>,
    /// Driest first.
    pub driest_days: Vec<DailyHumidity>,
    /// Least risky first.
    pub mold_risk: Vec<DailyMoldRisk>,
    pub autumn_onset: SeasonOnset,
    pub winter_onset: SeasonOnset,
}

impl LocationReport {
    pub fn build(readings: &[Reading], location: Location, date: Option<NaiveDate>) -> Self {
        let date_query = date.map(|date| DateQuery {
            date,
            average_temperature: analysis::average_temperature_for_date(readings, location, date),
            average_humidity: analysis::average_humidity_for_date(readings, location, date),
        });

        Self {
            location,
            date_query,
            warmest_days: analysis::daily_averages_sorted(readings, location, SortDirection::Descending),
            driest_days: analysis::daily_humidity_sorted(readings, location, SortDirection::Ascending),
            mold_risk: analysis::daily_mold_risk_sorted(readings, location, SortDirection::Ascending),
            autumn_onset: analysis::season_onset(readings, location, Season::Autumn),
            winter_onset: analysis::season_onset(readings, location, Season::Winter),
        }
    }
}

/// Report over the whole reading set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_readings: usize,
    pub hottest: Option<Reading>,
    pub locations: Vec<LocationReport>,
}

impl AnalysisReport {
    pub fn build(readings: &[Reading], locations: &[Location], date: Option<NaiveDate>) -> Self {
        Self {
            total_readings: readings.len(),
            hottest: analysis::hottest_reading(readings).cloned(),
            locations: locations
                .iter()
                .map(|&location| LocationReport::build(readings, location, date))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render_json(report: &AnalysisReport) -> Result<String, WeatherError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "Readings analysed: {}", report.total_readings)?;
    match &report.hottest {
        Some(r) => writeln!(
            out,
            "Hottest reading: {:.1} °C ({}, {})",
            r.temperature,
            r.location,
            r.timestamp.format("%Y-%m-%d %H:%M")
        )?,
        None => writeln!(out, "Hottest reading: no data")?,
    }

    for loc in &report.locations {
        write_location(out, loc)?;
    }
    Ok(())
}

fn write_location(out: &mut String, loc: &LocationReport) -> std::fmt::Result {
    let name = loc.location;

    if let Some(q) = &loc.date_query {
        writeln!(out, "\n--- {} average for {} ---", name, q.date.format(DATE_FMT))?;
        match q.average_temperature {
            Some(t) => writeln!(out, "Temperature: {:.1} °C", t)?,
            None => writeln!(out, "No {} data found for that date.", name)?,
        }
        if let Some(h) = q.average_humidity {
            writeln!(out, "Humidity: {:.1} %", h)?;
        }
    }

    writeln!(out, "\n--- {} days by average temperature (warmest to coldest) ---", name)?;
    writeln!(out, "{:<12} {:<12}", "Date", "AvgTemp(°C)")?;
    writeln!(out, "{}", "-".repeat(26))?;
    for day in &loc.warmest_days {
        writeln!(out, "{:<12} {:<12.1}", day.date.format(DATE_FMT).to_string(), day.average_temperature)?;
    }
    writeln!(out, "Unique {} days: {}", name, loc.warmest_days.len())?;

    writeln!(out, "\n--- {} days by average humidity (driest to most humid) ---", name)?;
    writeln!(out, "{:<12} {:<12}", "Date", "AvgHum(%)")?;
    writeln!(out, "{}", "-".repeat(26))?;
    for day in &loc.driest_days {
        writeln!(out, "{:<12} {:<12.1}", day.date.format(DATE_FMT).to_string(), day.average_humidity)?;
    }

    writeln!(out, "\n--- {} days by mold risk (least to greatest) ---", name)?;
    writeln!(out, "{:<12} {:<10} {:<10} {:<10}", "Date", "Temp(°C)", "Hum(%)", "Risk")?;
    writeln!(out, "{}", "-".repeat(45))?;
    for day in &loc.mold_risk {
        writeln!(
            out,
            "{:<12} {:<10.1} {:<10.1} {:<10.2}",
            day.date.format(DATE_FMT).to_string(),
            day.average_temperature,
            day.average_humidity,
            day.risk_index
        )?;
    }

    writeln!(out, "\n--- Meteorological seasons ({}) ---", name)?;
    writeln!(out, "Autumn: {}", describe_onset(&loc.autumn_onset))?;
    writeln!(out, "Winter: {}", describe_onset(&loc.winter_onset))?;
    Ok(())
}

fn describe_onset(onset: &SeasonOnset) -> String {
    match onset {
        SeasonOnset::Found { date } => format!("starts on {}", date.format(DATE_FMT)),
        SeasonOnset::InsufficientSeries { available } => format!(
            "could not be determined (only {} days of data, need {})",
            available,
            analysis::SEASON_WINDOW_DAYS
        ),
        SeasonOnset::NoQualifyingWindow => "could not be determined from this dataset".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
