/// Ingestion collaborators: turn external data into `Reading`s.
///
/// Malformed input is dropped here so the analysis engine only ever sees
/// well-formed readings.

pub mod csv;
