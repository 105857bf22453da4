//! Farm dashboard CLI
//!
//! Command-line interface for the flag farm operator console.

use std::path::PathBuf;

use clap::Parser;
use farm_dashboard::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "farm-dashboard")]
#[command(about = "Operator console for the flag farm")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Farm server base URL (overrides config file)
    #[arg(long)]
    server: Option<String>,

    /// Console port (overrides config file)
    #[arg(long)]
    console_port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, server={:?}, console_port={:?}, log_level={:?}",
        args.config,
        args.server,
        args.console_port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    if let Some(console_port) = args.console_port {
        config.console.port = console_port;
    }

    tracing::info!("Starting farm dashboard");
    farm_dashboard::run(config).await?;

    Ok(())
}
