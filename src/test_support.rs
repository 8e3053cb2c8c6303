//! Fixture builders shared by the unit tests.

use chrono::NaiveDate;

use crate::model::{Location, Reading};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A reading at `hour:00:00` on the given `(year, month, day)`.
pub fn reading(
    location: Location,
    (year, month, day): (i32, u32, u32),
    hour: u32,
    temperature: f64,
    humidity: f64,
) -> Reading {
    let timestamp = date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("valid test time");
    Reading::new(location, timestamp, temperature, humidity)
}
