/// Aggregation engine for the weather statistics service.
///
/// Every function here is a pure function of a reading slice and its
/// parameters: nothing is cached, logged, or mutated, so calling a query
/// twice on the same input always yields the same answer.
///
/// Submodules:
/// - `groupings` — filters a flat reading list by location and partitions it
///   by calendar date.
/// - `summary`   — per-date averages, rankings and the hottest reading.
/// - `mold`      — the heuristic mold risk index and its daily ranking.
/// - `seasons`   — sliding-window detection of meteorological autumn/winter.

pub mod groupings;
pub mod mold;
pub mod seasons;
pub mod summary;

pub use mold::{daily_mold_risk_sorted, mold_risk_index};
pub use seasons::{
    find_season_onset, meteorological_autumn_onset, meteorological_winter_onset, season_onset,
    Season, SeasonOnset, SEASON_WINDOW_DAYS,
};
pub use summary::{
    average_humidity_for_date, average_temperature_for_date, daily_averages_chronological,
    daily_averages_sorted, daily_humidity_sorted, hottest_reading,
};
