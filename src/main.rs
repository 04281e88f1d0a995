//! CoBank backend health responder.
//!
//! Entry point: parses arguments, initializes tracing, loads the optional
//! configuration file and serves the health responder until killed.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cobank_backend::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use cobank_backend::{create_router, http};

/// Liveness responder for the CoBank backend service
#[derive(Parser, Debug)]
#[command(name = "cobank-backend", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "cobank_backend=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let json = (format == LogFormat::Json).then(|| tracing_subscriber::fmt::layer().json());
    let text = (format == LogFormat::Text).then(|| tracing_subscriber::fmt::layer());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter))
        .with(json)
        .with(text)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging format comes from config, so config loads before tracing
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    init_tracing(&log_filter, config.logging.format);

    match &args.config {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!("Using built-in configuration"),
    }

    let app = create_router();

    if let Err(e) = http::start_server(app).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
