/// PostgreSQL storage for readings
///
/// The store is a plain collaborator: callers pass an explicit `Client`,
/// nothing here holds a connection of its own. The analysis engine only ever
/// sees the `Vec<Reading>` returned by `load_readings`.

use chrono::NaiveDateTime;
use postgres::{Client, NoTls};
use std::path::Path;

use crate::config;
use crate::ingest::csv;
use crate::logging::{self, Component};
use crate::model::{Location, Reading, WeatherError};

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS weather_readings (
        id           BIGSERIAL PRIMARY KEY,
        location     TEXT             NOT NULL CHECK (location IN ('outdoor', 'indoor')),
        measured_at  TIMESTAMP        NOT NULL,
        temperature  DOUBLE PRECISION NOT NULL,
        humidity     DOUBLE PRECISION NOT NULL
    )
";

const CREATE_INDEX: &str = "
    CREATE INDEX IF NOT EXISTS weather_readings_location_time
        ON weather_readings (location, measured_at)
";

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// Connects using `DATABASE_URL` and makes sure the schema exists.
pub fn connect() -> Result<Client, WeatherError> {
    let url = config::database_url()?;
    let mut client = Client::connect(&url, NoTls)?;
    ensure_schema(&mut client)?;
    logging::debug(Component::Database, None, "connected, schema verified");
    Ok(client)
}

/// Creates the readings table and its index if they do not exist yet.
pub fn ensure_schema(client: &mut Client) -> Result<(), WeatherError> {
    client.batch_execute(CREATE_TABLE)?;
    client.batch_execute(CREATE_INDEX)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Number of stored readings.
pub fn reading_count(client: &mut Client) -> Result<i64, WeatherError> {
    let row = client.query_one("SELECT COUNT(*) FROM weather_readings", &[])?;
    Ok(row.get(0))
}

/// Inserts all readings in a single transaction. Returns the number inserted.
pub fn insert_readings(client: &mut Client, readings: &[Reading]) -> Result<usize, WeatherError> {
    let mut tx = client.transaction()?;
    let stmt = tx.prepare(
        "INSERT INTO weather_readings (location, measured_at, temperature, humidity)
         VALUES ($1, $2, $3, $4)",
    )?;

    for reading in readings {
        tx.execute(
            &stmt,
            &[
                &reading.location.as_str(),
                &reading.timestamp,
                &reading.temperature,
                &reading.humidity,
            ],
        )?;
    }

    tx.commit()?;
    Ok(readings.len())
}

/// Loads every stored reading, oldest first.
///
/// Rows with a location tag the model does not know are skipped with a
/// warning; the table constraint should make that impossible.
pub fn load_readings(client: &mut Client) -> Result<Vec<Reading>, WeatherError> {
    let rows = client.query(
        "SELECT id, location, measured_at, temperature, humidity
         FROM weather_readings
         ORDER BY measured_at, id",
        &[],
    )?;

    let mut readings = Vec::with_capacity(rows.len());
    for row in rows {
        let id: i64 = row.get(0);
        let tag: String = row.get(1);
        let location: Location = match tag.parse() {
            Ok(location) => location,
            Err(e) => {
                logging::warn(Component::Database, Some(&format!("id {}", id)), &e.to_string());
                continue;
            }
        };
        let timestamp: NaiveDateTime = row.get(2);
        readings.push(Reading {
            id: Some(id),
            location,
            timestamp,
            temperature: row.get(3),
            humidity: row.get(4),
        });
    }

    Ok(readings)
}

/// Imports `csv_path` when the table is empty. Returns the number of rows
/// inserted, or 0 when data was already present.
pub fn seed_if_empty(client: &mut Client, csv_path: &Path) -> Result<usize, WeatherError> {
    let existing = reading_count(client)?;
    if existing > 0 {
        logging::debug(
            Component::Database,
            None,
            &format!("{} readings already stored, skipping import", existing),
        );
        return Ok(0);
    }

    logging::info(
        Component::Database,
        None,
        &format!("Importing {} ...", csv_path.display()),
    );
    let outcome = csv::import_file(csv_path)?;
    let inserted = insert_readings(client, &outcome.readings)?;
    logging::info(Component::Database, None, &format!("Imported {} rows.", inserted));
    Ok(inserted)
}
