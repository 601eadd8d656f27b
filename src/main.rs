//! Prompt relay.
//!
//! Forwards browser prompts to the Messages API with the caller's key and
//! serves the static front-end.
//!
//! ```text
//!     Browser ──POST /api/generate──▶ generate ──▶ UpstreamClient ──▶ Messages API
//!             ◀── upstream JSON or {error} ──────────────────────────┘
//!
//!     Browser ──GET / , /{path}─────▶ assets ──▶ asset root (files)
//!     Probe   ──GET /health─────────▶ health
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use prompt_relay::config::{self, RelayConfig};
use prompt_relay::lifecycle::{spawn_signal_listener, Shutdown};
use prompt_relay::observability::logging;
use prompt_relay::HttpServer;

#[derive(Parser)]
#[command(name = "prompt-relay")]
#[command(about = "Relay browser prompts to the Messages API and serve the front-end", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used without it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override assets.root_dir.
    #[arg(short, long)]
    root: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(root) = cli.root {
        config.assets.root_dir = root;
    }
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;

    logging::init(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        "prompt-relay starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_listener(shutdown);

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
