//! HTTP labs server.
//!
//! Serves exactly one lab per process.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!     Client Request      │  request id → trace → timeout → body limit   │
//!     ────────────────────┼─▶ → deny list → metrics → route table        │
//!                         │                                │             │
//!                         │        ┌───────────────┬───────┴──────┐      │
//!                         │        ▼               ▼              ▼      │
//!                         │   basics / boats   aggregate      forward    │
//!                         │   (local state)   (upstream      (hyper      │
//!                         │        │           client)        relay)     │
//!                         │        ▼               │              │      │
//!                         │   record store         ▼              ▼      │
//!                         │                  boat + brand    any http    │
//!                         │                   catalogs       upstream    │
//!                         └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use http_labs::config::loader::{apply_env, load_config, validate};
use http_labs::config::{Lab, LabConfig};
use http_labs::lifecycle::{signals, Shutdown};
use http_labs::observability::{logging, metrics};
use http_labs::HttpServer;

#[derive(Parser)]
#[command(name = "http-labs")]
#[command(about = "Serve one HTTP lab", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lab to serve; overrides the configuration file.
    #[arg(value_enum)]
    lab: Option<Lab>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LabConfig::default(),
    };
    apply_env(&mut config)?;
    if let Some(lab) = cli.lab {
        config.lab = lab;
    }

    logging::init_logging(&config.observability.log_level);
    validate(&config)?;

    tracing::info!(
        lab = %config.lab,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    HttpServer::new(config)?.run(listener, stop).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
