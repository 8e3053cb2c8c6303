//! Per-date averages, rankings and extremum queries.
//!
//! Value-sorted series break ties by ascending date so the output order never
//! depends on how the input happened to be enumerated.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::groupings::{group_by_date, mean_of, readings_at};
use crate::model::{DailyAverage, DailyHumidity, Location, Reading, SortDirection};

// ---------------------------------------------------------------------------
// Extremum
// ---------------------------------------------------------------------------

/// The reading with the highest temperature across every location.
///
/// When several readings share the maximum, the first one in input order
/// wins. Returns `None` for an empty slice.
pub fn hottest_reading(readings: &[Reading]) -> Option<&Reading> {
    readings.iter().reduce(|best, r| {
        if r.temperature > best.temperature { r } else { best }
    })
}

// ---------------------------------------------------------------------------
// Single-date averages
// ---------------------------------------------------------------------------

/// Mean temperature at `location` on `date`, or `None` when no reading
/// matches. `Some(0.0)` is a real average, never a placeholder.
pub fn average_temperature_for_date(
    readings: &[Reading],
    location: Location,
    date: NaiveDate,
) -> Option<f64> {
    let matching: Vec<&Reading> = readings_at(readings, location)
        .filter(|r| r.date() == date)
        .collect();
    mean_of(&matching, |r| r.temperature)
}

/// Mean relative humidity at `location` on `date`, or `None` when no reading
/// matches.
pub fn average_humidity_for_date(
    readings: &[Reading],
    location: Location,
    date: NaiveDate,
) -> Option<f64> {
    let matching: Vec<&Reading> = readings_at(readings, location)
        .filter(|r| r.date() == date)
        .collect();
    mean_of(&matching, |r| r.humidity)
}

// ---------------------------------------------------------------------------
// Daily series
// ---------------------------------------------------------------------------

/// One `DailyAverage` per date with readings at `location`, oldest first.
pub fn daily_averages_chronological(readings: &[Reading], location: Location) -> Vec<DailyAverage> {
    group_by_date(readings, location)
        .into_iter()
        .filter_map(|(date, group)| {
            mean_of(&group, |r| r.temperature).map(|average_temperature| DailyAverage {
                date,
                average_temperature,
            })
        })
        .collect()
}

/// Daily average temperatures ranked by value. `Descending` gives the usual
/// warmest-first ranking.
pub fn daily_averages_sorted(
    readings: &[Reading],
    location: Location,
    direction: SortDirection,
) -> Vec<DailyAverage> {
    let mut days = daily_averages_chronological(readings, location);
    days.sort_by(|a, b| {
        by_value_then_date(
            a.average_temperature,
            b.average_temperature,
            a.date,
            b.date,
            direction,
        )
    });
    days
}

/// Daily average humidity ranked by value. `Ascending` gives the usual
/// driest-first ranking.
pub fn daily_humidity_sorted(
    readings: &[Reading],
    location: Location,
    direction: SortDirection,
) -> Vec<DailyHumidity> {
    let mut days: Vec<DailyHumidity> = group_by_date(readings, location)
        .into_iter()
        .filter_map(|(date, group)| {
            mean_of(&group, |r| r.humidity).map(|average_humidity| DailyHumidity {
                date,
                average_humidity,
            })
        })
        .collect();
    days.sort_by(|a, b| {
        by_value_then_date(a.average_humidity, b.average_humidity, a.date, b.date, direction)
    });
    days
}

/// Orders by `value` in `direction`, then by date ascending regardless of
/// direction.
pub(crate) fn by_value_then_date(
    a_value: f64,
    b_value: f64,
    a_date: NaiveDate,
    b_date: NaiveDate,
    direction: SortDirection,
) -> Ordering {
    let by_value = match direction {
        SortDirection::Ascending => a_value.total_cmp(&b_value),
        SortDirection::Descending => b_value.total_cmp(&a_value),
    };
    by_value.then_with(|| a_date.cmp(&b_date))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
