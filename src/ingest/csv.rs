/// CSV importer for temperature/humidity logger exports
///
/// Expected layout, one header line followed by rows of:
///
/// ```text
/// timestamp,place,temperature,humidity
/// 2016-10-01 08:00:00,Ute,7.2,84
/// ```
///
/// Rows that cannot be turned into a `Reading` are skipped and counted, never
/// reported as errors.

use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

use crate::logging::{self, Component, SkipReason};
use crate::model::{Location, Reading, WeatherError};

/// Timestamp layouts seen in logger exports, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Minimum number of comma-separated fields in a usable row.
const MIN_COLUMNS: usize = 4;

/// Readings parsed from one CSV document plus the number of data rows dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub readings: Vec<Reading>,
    pub skipped: usize,
}

impl ImportOutcome {
    /// Data rows seen, excluding the header and blank lines.
    pub fn total_rows(&self) -> usize {
        self.readings.len() + self.skipped
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a full CSV document. The first line is always treated as a header.
pub fn parse_readings(csv: &str) -> ImportOutcome {
    let mut readings = Vec::new();
    let mut skipped = 0;

    for (i, line) in csv.lines().enumerate() {
        if i == 0 || line.trim().is_empty() {
            continue; // Skip header or empty lines
        }

        match parse_row(line) {
            Ok(reading) => readings.push(reading),
            Err(reason) => {
                skipped += 1;
                logging::log_skipped_row(i + 1, reason);
            }
        }
    }

    ImportOutcome { readings, skipped }
}

/// Parses one data row into a `Reading`.
pub fn parse_row(line: &str) -> Result<Reading, SkipReason> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_COLUMNS {
        return Err(SkipReason::TooFewColumns);
    }

    let timestamp = parse_timestamp(fields[0]).ok_or(SkipReason::BadTimestamp)?;
    let location: Location = fields[1].parse().map_err(|_| SkipReason::UnknownLocation)?;
    let temperature = parse_number(fields[2]).ok_or(SkipReason::BadTemperature)?;
    let humidity = parse_number(fields[3]).ok_or(SkipReason::BadHumidity)?;

    Ok(Reading::new(location, timestamp, temperature, humidity))
}

/// Accepts every layout in `TIMESTAMP_FORMATS`, plus a bare date at midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parses a decimal with `.` as separator. Non-finite values are rejected.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// File import
// ============================================================================

/// Reads and parses the CSV file at `path`. Only I/O failures are errors.
pub fn import_file(path: &Path) -> Result<ImportOutcome, WeatherError> {
    let text = std::fs::read_to_string(path)?;
    let outcome = parse_readings(&text);
    logging::log_import_summary(
        Component::Csv,
        outcome.total_rows(),
        outcome.readings.len(),
        outcome.skipped,
    );
    Ok(outcome)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Datum,Plats,Temp,Luftfuktighet";

    #[test]
    fn test_parses_well_formed_rows() {
        let csv = format!(
            "{}\n2016-10-01 08:00:00,Ute,7.2,84\n2016-10-01 08:00:00,Inne,21.5,41\n",
            HEADER
        );
        let outcome = parse_readings(&csv);
        assert_eq!(outcome.skipped, 0);
        assert_eq!(outcome.readings.len(), 2);
        assert_eq!(outcome.readings[0].location, Location::Outdoor);
        assert_eq!(outcome.readings[0].temperature, 7.2);
        assert_eq!(outcome.readings[1].location, Location::Indoor);
        assert_eq!(outcome.readings[1].humidity, 41.0);
        assert!(outcome.readings.iter().all(|r| r.id.is_none()));
    }

    #[test]
    fn test_header_is_never_parsed_as_data() {
        // A header that happens to look like data is still skipped.
        let csv = "2016-10-01 08:00:00,Ute,7.2,84\n2016-10-02 08:00:00,Ute,6.0,80";
        let outcome = parse_readings(csv);
        assert_eq!(outcome.readings.len(), 1);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_blank_lines_are_ignored_not_counted() {
        let csv = format!("{}\n\n2016-10-01 08:00,Ute,7.2,84\n   \n", HEADER);
        let outcome = parse_readings(&csv);
        assert_eq!(outcome.readings.len(), 1);
        assert_eq!(outcome.total_rows(), 1);
    }

    #[test]
    fn test_malformed_rows_are_skipped_and_counted() {
        let csv = format!(
            "{}\n\
             2016-10-01 08:00,Ute,7.2\n\
             yesterday,Ute,7.2,84\n\
             2016-10-01 09:00,Ute,warm,84\n\
             2016-10-01 10:00,Ute,7.2,NaN\n\
             2016-10-01 11:00,Garage,7.2,84\n\
             2016-10-01 12:00,Ute,8.0,82\n",
            HEADER
        );
        let outcome = parse_readings(&csv);
        assert_eq!(outcome.readings.len(), 1);
        assert_eq!(outcome.skipped, 5);
        assert_eq!(outcome.readings[0].temperature, 8.0);
    }

    #[test]
    fn test_row_skip_reasons() {
        assert_eq!(parse_row("2016-10-01 08:00,Ute,7.2"), Err(SkipReason::TooFewColumns));
        assert_eq!(parse_row("01/10/2016,Ute,7.2,84"), Err(SkipReason::BadTimestamp));
        assert_eq!(parse_row("2016-10-01,Attic,7.2,84"), Err(SkipReason::UnknownLocation));
        assert_eq!(parse_row("2016-10-01,Ute,,84"), Err(SkipReason::BadTemperature));
        assert_eq!(parse_row("2016-10-01,Ute,7.2,high"), Err(SkipReason::BadHumidity));
    }

    #[test]
    fn test_timestamp_layouts() {
        let expected = NaiveDate::from_ymd_opt(2016, 10, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2016-10-01 08:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2016-10-01 08:30"), Some(expected));
        assert_eq!(parse_timestamp("2016-10-01T08:30:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2016-10-01"),
            NaiveDate::from_ymd_opt(2016, 10, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("2016-13-01 08:30"), None);
    }

    #[test]
    fn test_extra_columns_are_tolerated() {
        let reading = parse_row("2016-10-01 08:00,Inne,22.1,39,sensor-2").expect("valid row");
        assert_eq!(reading.location, Location::Indoor);
        assert_eq!(reading.humidity, 39.0);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let result = import_file(Path::new("no/such/readings.csv"));
        assert!(matches!(result, Err(WeatherError::Io(_))));
    }
}
