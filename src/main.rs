//! Content gateway binary.
//!
//! Serves two extension services behind one HTTP listener: suffix-based
//! form-submission routing and dynamic client-library aggregation.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use content_gateway::config::{load_config, watcher::ConfigWatcher, GatewayConfig};
use content_gateway::http::HttpServer;
use content_gateway::lifecycle::Shutdown;
use content_gateway::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "content-gateway")]
#[command(about = "Form routing and dynamic client-library gateway", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let from_file = args.config.exists();
    let config = if from_file {
        load_config(&args.config)?
    } else {
        GatewayConfig::default()
    };

    init_logging(&config.observability);

    if !from_file {
        tracing::warn!(path = ?args.config, "Config file not found, using defaults");
    }
    tracing::info!(
        bind_address = %config.listener.bind_address,
        forms_suffix = %config.forms.suffix,
        clientlibs_path = %config.clientlibs.path,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let (watcher, config_updates) = ConfigWatcher::new(&args.config);
    // The watch handle must outlive the server for reloads to fire.
    let _watch_guard = if from_file { Some(watcher.run()?) } else { None };

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config);
    server.run(listener, config_updates, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
