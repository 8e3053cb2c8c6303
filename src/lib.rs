//! Indoor/outdoor temperature and humidity statistics.
//!
//! `analysis` is the pure aggregation engine. Everything else is plumbing
//! around it: `ingest` and `db` produce readings, `report` formats results,
//! `config` and `logging` carry the ambient setup for the binary.

pub mod analysis;
pub mod config;
pub mod db;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;

#[cfg(test)]
pub(crate) mod test_support;
