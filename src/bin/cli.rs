//! Wildfire API CLI
//!
//! Runs the same queries as the HTTP endpoints directly against the data
//! files and prints the JSON result.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use incendios::{Config, DatasetStore, NationalQuery, QueryService, RegionalQuery};
use tracing_subscriber::{fmt, EnvFilter};

/// Wildfire API CLI
#[derive(Parser, Debug)]
#[command(name = "incendios-cli")]
#[command(about = "Query the wildfire datasets without running the server")]
#[command(version)]
struct Args {
    /// Directory holding teziutlan.json and nacional.json
    #[arg(short, long, env = "INCENDIOS_DATA_DIR", default_value = "./data")]
    data_dir: String,

    /// Regional dataset file name (inside the data directory)
    #[arg(long, env = "INCENDIOS_REGIONAL_FILE", default_value = "teziutlan.json")]
    regional_file: String,

    /// National dataset file name (inside the data directory)
    #[arg(long, env = "INCENDIOS_NATIONAL_FILE", default_value = "nacional.json")]
    national_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Query the Teziutlán dataset
    Teziutlan {
        /// Exact incident year
        #[arg(long = "anio")]
        year: Option<i64>,

        /// Substring of the cause (case-insensitive)
        #[arg(long = "causa")]
        cause: Option<String>,
    },

    /// Query the national dataset
    Nacional {
        /// Substring of the entity name (case-insensitive)
        #[arg(long = "entidad")]
        entity: Option<String>,

        /// Exact incident year
        #[arg(long = "anio")]
        year: Option<i64>,
    },

    /// Show what was loaded from each data file
    Info,
}

fn main() {
    // Diagnostics go to stderr so stdout stays pure JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .regional_file(&args.regional_file)
        .national_file(&args.national_file)
        .build();

    let service = QueryService::new(Arc::new(DatasetStore::load(&config)));

    let output = match args.command {
        Commands::Teziutlan { year, cause } => {
            serde_json::to_string_pretty(&service.regional(&RegionalQuery::new(year, cause)))
        }
        Commands::Nacional { entity, year } => {
            serde_json::to_string_pretty(&service.national(&NationalQuery::new(entity, year)))
        }
        Commands::Info => serde_json::to_string_pretty(&service.store().report().summary()),
    };

    match output {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::error!("Failed to encode output: {}", e);
            std::process::exit(1);
        }
    }
}

