//! Location filtering and calendar-date grouping.
//!
//! Every derived series starts here. A `BTreeMap` keyed by `NaiveDate` keeps
//! groups in chronological order, which the season detector relies on, and
//! only dates that actually have readings ever get a key.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{Location, Reading};

/// Readings of one location on one calendar date, in input order.
pub type DateGroups<'a> = BTreeMap<NaiveDate, Vec<&'a Reading>>;

/// Iterates over the readings taken at `location`, preserving input order.
pub fn readings_at<'a>(
    readings: &'a [Reading],
    location: Location,
) -> impl Iterator<Item = &'a Reading> + 'a {
    readings.iter().filter(move |r| r.location == location)
}

/// Partitions the readings of `location` by calendar date.
pub fn group_by_date(readings: &[Reading], location: Location) -> DateGroups<'_> {
    let mut groups: DateGroups<'_> = BTreeMap::new();
    for reading in readings_at(readings, location) {
        groups.entry(reading.date()).or_default().push(reading);
    }
    groups
}

/// Arithmetic mean of `field` over a non-empty group. Returns `None` for an
/// empty group so callers can tell "no data" from an average of 0.0.
pub fn mean_of<F>(group: &[&Reading], field: F) -> Option<f64>
where
    F: Fn(&Reading) -> f64,
{
    if group.is_empty() {
        return None;
    }
    let sum: f64 = group.iter().map(|r| field(*r)).sum();
    Some(sum / group.len() as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
