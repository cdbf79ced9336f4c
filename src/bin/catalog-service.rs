//! Standalone boat or brand catalog, the upstreams of the aggregate lab.

use std::net::SocketAddr;

use clap::Parser;
use tokio::net::TcpListener;

use http_labs::catalog::CatalogService;
use http_labs::lifecycle::{shutdown, signals, Shutdown};
use http_labs::observability::logging;

#[derive(Parser)]
#[command(name = "catalog-service")]
#[command(about = "Run the boat or brand catalog service", long_about = None)]
struct Cli {
    #[arg(value_enum)]
    service: CatalogService,

    /// Port to listen on. Falls back to $PORT, then to any free port.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging("info");

    let port = match cli.port {
        Some(port) => port,
        None => match std::env::var("PORT") {
            Ok(value) if !value.is_empty() => value.parse()?,
            _ => 0,
        },
    };

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port))).await?;
    let addr = listener.local_addr()?;
    tracing::info!(port = addr.port(), "{} service listening on localhost", cli.service.label());

    let trigger = Shutdown::new();
    let stop = trigger.subscribe();
    signals::spawn_signal_handler(trigger);

    axum::serve(listener, cli.service.router())
        .with_graceful_shutdown(shutdown::wait(stop))
        .await?;
    Ok(())
}
