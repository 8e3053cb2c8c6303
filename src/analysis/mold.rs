//! Heuristic mold risk index.
//!
//! Not a physical growth model. Downstream rankings compare these numbers
//! directly, so the thresholds and the branch structure below must not drift.

use super::groupings::{group_by_date, mean_of};
use super::summary::by_value_then_date;
use crate::model::{DailyMoldRisk, Location, Reading, SortDirection};

/// Below this average humidity (%) the day is considered too dry for mold.
pub const MOLD_MIN_HUMIDITY: f64 = 75.0;

/// Humidity (%) subtracted before scaling; the "surplus" starts here.
pub const MOLD_HUMIDITY_BASELINE: f64 = 70.0;

/// Below this average temperature (°C) the day is considered too cold.
pub const MOLD_MIN_TEMPERATURE: f64 = 0.0;

/// Divisor applied to the average temperature.
pub const MOLD_TEMPERATURE_SCALE: f64 = 10.0;

/// Risk index for one day's averages.
///
/// ```text
/// humidity < 75 or temperature < 0  →  0
/// otherwise                         →  (humidity - 70) * (temperature / 10)
/// ```
pub fn mold_risk_index(avg_temperature: f64, avg_humidity: f64) -> f64 {
    if avg_humidity < MOLD_MIN_HUMIDITY || avg_temperature < MOLD_MIN_TEMPERATURE {
        0.0
    } else {
        (avg_humidity - MOLD_HUMIDITY_BASELINE) * (avg_temperature / MOLD_TEMPERATURE_SCALE)
    }
}

/// Daily mold risk at `location`, ranked by risk index. `Ascending` gives the
/// usual least-risky-first ranking; ties fall back to date ascending.
pub fn daily_mold_risk_sorted(
    readings: &[Reading],
    location: Location,
    direction: SortDirection,
) -> Vec<DailyMoldRisk> {
    let mut days: Vec<DailyMoldRisk> = group_by_date(readings, location)
        .into_iter()
        .filter_map(|(date, group)| {
            let average_temperature = mean_of(&group, |r| r.temperature)?;
            let average_humidity = mean_of(&group, |r| r.humidity)?;
            Some(DailyMoldRisk {
                date,
                average_temperature,
                average_humidity,
                risk_index: mold_risk_index(average_temperature, average_humidity),
            })
        })
        .collect();
    days.sort_by(|a, b| by_value_then_date(a.risk_index, b.risk_index, a.date, b.date, direction));
    days
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
