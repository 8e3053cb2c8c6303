//! weather_stats — imports logger exports and prints daily statistics.
//!
//! Flow: load config → init logger → obtain readings (PostgreSQL, seeded from
//! the CSV on first run, or the CSV directly with `--no-db`) → build the
//! report → print it.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use weather_stats::config::{Config, DEFAULT_CONFIG_PATH};
use weather_stats::logging::{self, Component};
use weather_stats::model::{self, Location, Reading, WeatherError};
use weather_stats::report::{self, AnalysisReport};
use weather_stats::{db, ingest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LocationArg {
    Outdoor,
    Indoor,
    Both,
}

impl LocationArg {
    fn locations(self) -> Vec<Location> {
        match self {
            LocationArg::Outdoor => vec![Location::Outdoor],
            LocationArg::Indoor => vec![Location::Indoor],
            LocationArg::Both => Location::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "weather_stats", version, about = "Daily temperature, humidity and mold-risk statistics")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// CSV export to analyse (overrides `csv_path` from the config)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Which sensor location(s) to report on
    #[arg(short, long, value_enum, default_value_t = LocationArg::Both)]
    location: LocationArg,

    /// Date (YYYY-MM-DD) to report the average for
    #[arg(short, long)]
    date: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Analyse the CSV directly without touching the database
    #[arg(long)]
    no_db: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_logger(
        config.log_level,
        config.log_file.as_deref(),
        config.console_timestamps,
    );

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::error(Component::System, None, &e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let date = args.date.as_deref().map(model::parse_date).transpose()?;
    let csv_path = args.csv.clone().unwrap_or_else(|| config.csv_path.clone());

    let readings = if args.no_db || !config.use_database {
        load_from_csv(&csv_path)?
    } else {
        load_from_database(&csv_path)?
    };

    let report = AnalysisReport::build(&readings, &args.location.locations(), date);
    let output = if args.json {
        report::render_json(&report)?
    } else {
        report::render_text(&report)
    };
    println!("{}", output);
    Ok(())
}

fn load_from_csv(path: &std::path::Path) -> Result<Vec<Reading>, WeatherError> {
    let outcome = ingest::csv::import_file(path)?;
    Ok(outcome.readings)
}

fn load_from_database(csv_path: &std::path::Path) -> Result<Vec<Reading>, WeatherError> {
    let mut client = db::connect()?;
    db::seed_if_empty(&mut client, csv_path)?;
    let readings = db::load_readings(&mut client)?;
    logging::info(
        Component::Database,
        None,
        &format!("Loaded {} readings", readings.len()),
    );
    Ok(readings)
}
