//! Wildfire API Server Binary
//!
//! Loads both datasets and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;
use incendios::http::Server;
use incendios::{Config, DatasetStore, QueryService};
use tracing_subscriber::{fmt, EnvFilter};

/// Wildfire incident API server
#[derive(Parser, Debug)]
#[command(name = "incendios-server")]
#[command(about = "HTTP API over historical wildfire-incident records")]
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

    /// Directory served under /docs
    #[arg(long, env = "INCENDIOS_DOCS_DIR", default_value = "./docs")]
    docs_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, env = "INCENDIOS_LISTEN", default_value = "127.0.0.1:8000")]
    listen: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,incendios=debug,tower_http=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Incendios API v{}", incendios::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Docs directory: {}", args.docs_dir);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .regional_file(&args.regional_file)
        .national_file(&args.national_file)
        .docs_dir(&args.docs_dir)
        .listen_addr(&args.listen)
        .build();

    // All file I/O happens here, before the listener binds
    let store = DatasetStore::load(&config);
    if !store.report().all_ok() {
        tracing::warn!("Starting with at least one empty dataset");
    }

    let service = QueryService::new(Arc::new(store));

    let server = Server::new(config, service);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
