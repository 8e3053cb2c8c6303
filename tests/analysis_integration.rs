/// End-to-end tests for the analysis engine, fed through the CSV importer
///
/// Tests verify:
/// 1. Malformed rows never reach the engine
/// 2. Daily rankings and mold risk over a mixed indoor/outdoor export
/// 3. Season onset detection over an autumn → winter transition with gaps
///
/// No database or network access is required.

use chrono::NaiveDate;
use weather_stats::analysis::{self, Season, SeasonOnset};
use weather_stats::ingest::csv;
use weather_stats::model::{Location, Reading, SortDirection};

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a CSV export with one outdoor reading at 06:00 and one at 18:00
/// per entry, each offset by ±1 °C around the given daily mean, plus a
/// steady indoor reading.
fn export(days: &[((i32, u32, u32), f64, f64)]) -> String {
    let mut csv = String::from("Datum,Plats,Temp,Luftfuktighet\n");
    for &((y, m, d), mean, humidity) in days {
        csv.push_str(&format!("{:04}-{:02}-{:02} 06:00:00,Ute,{},{}\n", y, m, d, mean - 1.0, humidity));
        csv.push_str(&format!("{:04}-{:02}-{:02} 18:00:00,Ute,{},{}\n", y, m, d, mean + 1.0, humidity));
        csv.push_str(&format!("{:04}-{:02}-{:02} 12:00:00,Inne,21,45\n", y, m, d));
    }
    csv
}

fn load(csv_text: &str) -> Vec<Reading> {
    csv::parse_readings(csv_text).readings
}

// ---------------------------------------------------------------------------
// 1. Ingestion boundary
// ---------------------------------------------------------------------------

#[test]
fn test_malformed_rows_do_not_affect_averages() {
    let text = "Datum,Plats,Temp,Luftfuktighet\n\
                2016-10-01 06:00:00,Ute,4,80\n\
                2016-10-01 07:00:00,Ute,not-a-number,80\n\
                2016-10-01 08:00:00,Ute\n\
                2016-10-01 18:00:00,Ute,6,90\n";
    let outcome = csv::parse_readings(text);
    assert_eq!(outcome.skipped, 2);
    assert_eq!(
        analysis::average_temperature_for_date(&outcome.readings, Location::Outdoor, date(2016, 10, 1)),
        Some(5.0)
    );
    assert_eq!(
        analysis::average_humidity_for_date(&outcome.readings, Location::Outdoor, date(2016, 10, 1)),
        Some(85.0)
    );
}

// ---------------------------------------------------------------------------
// 2. Rankings
// ---------------------------------------------------------------------------

#[test]
fn test_rankings_over_mixed_export() {
    let readings = load(&export(&[
        ((2016, 9, 1), 15.0, 60.0),
        ((2016, 9, 2), 18.0, 85.0),
        ((2016, 9, 3), 12.0, 78.0),
    ]));

    let warmest = analysis::daily_averages_sorted(&readings, Location::Outdoor, SortDirection::Descending);
    let dates: Vec<NaiveDate> = warmest.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2016, 9, 2), date(2016, 9, 1), date(2016, 9, 3)]);

    let driest = analysis::daily_humidity_sorted(&readings, Location::Outdoor, SortDirection::Ascending);
    assert_eq!(driest[0].date, date(2016, 9, 1));

    // 9/1 too dry → 0; 9/3 → 8 * 1.2 = 9.6; 9/2 → 15 * 1.8 = 27
    let risk = analysis::daily_mold_risk_sorted(&readings, Location::Outdoor, SortDirection::Ascending);
    let dates: Vec<NaiveDate> = risk.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2016, 9, 1), date(2016, 9, 3), date(2016, 9, 2)]);
    assert_eq!(risk[0].risk_index, 0.0);

    // Indoor days are constant, so every indoor ranking is in date order.
    let indoor = analysis::daily_averages_sorted(&readings, Location::Indoor, SortDirection::Descending);
    let dates: Vec<NaiveDate> = indoor.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2016, 9, 1), date(2016, 9, 2), date(2016, 9, 3)]);

    let hottest = analysis::hottest_reading(&readings).expect("non-empty export");
    assert_eq!(hottest.temperature, 21.0);
    assert_eq!(hottest.location, Location::Indoor);
}

// ---------------------------------------------------------------------------
// 3. Seasons
// ---------------------------------------------------------------------------

#[test]
fn test_autumn_then_winter_across_a_sensor_outage() {
    // Oct 20–21 missing: the autumn window bridges the outage.
    let readings = load(&export(&[
        ((2016, 10, 17), 12.0, 80.0),
        ((2016, 10, 18), 9.0, 80.0),
        ((2016, 10, 19), 8.0, 80.0),
        ((2016, 10, 22), 7.0, 80.0),
        ((2016, 10, 23), 6.0, 80.0),
        ((2016, 10, 24), 5.0, 80.0),
        ((2016, 11, 28), -1.0, 90.0),
        ((2016, 11, 29), -2.0, 90.0),
        ((2016, 11, 30), 0.0, 90.0),
        ((2016, 12, 1), -4.0, 90.0),
        ((2016, 12, 2), -3.0, 90.0),
    ]));

    assert_eq!(
        analysis::meteorological_autumn_onset(&readings, Location::Outdoor),
        Some(date(2016, 10, 18))
    );
    assert_eq!(
        analysis::season_onset(&readings, Location::Outdoor, Season::Winter),
        SeasonOnset::Found { date: date(2016, 11, 28) }
    );
    assert_eq!(analysis::meteorological_winter_onset(&readings, Location::Indoor), None);
}

#[test]
fn test_short_export_reports_insufficient_series() {
    let readings = load(&export(&[((2016, 12, 1), -5.0, 90.0), ((2016, 12, 2), -6.0, 90.0)]));
    assert_eq!(
        analysis::season_onset(&readings, Location::Outdoor, Season::Winter),
        SeasonOnset::InsufficientSeries { available: 2 }
    );
}

#[test]
fn test_repeated_queries_are_identical() {
    let readings = load(&export(&[((2016, 9, 1), 15.0, 80.0), ((2016, 9, 2), 16.0, 82.0)]));
    let first = analysis::daily_mold_risk_sorted(&readings, Location::Outdoor, SortDirection::Ascending);
    let second = analysis::daily_mold_risk_sorted(&readings, Location::Outdoor, SortDirection::Ascending);
    assert_eq!(first, second);
}
