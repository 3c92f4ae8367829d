//! Portfolio site backend.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ─────────────────────▶│ request id → trace span → timeout → router   │
//!                           │                                  │            │
//!                           │          ┌───────────────────────┼─────────┐  │
//!                           │          ▼                       ▼         ▼  │
//!                           │   POST /api/contact     GET /api/contacts  GET /api/resume/download
//!                           │   validate → store      store.list()       resume.load()
//!                           │                                             │
//!                           │   non-API paths → static site (optional)    │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use portfolio_server::config::{load_config, validation::validate_config, ConfigError};
use portfolio_server::observability::{logging, metrics};
use portfolio_server::{HttpServer, PortfolioConfig, Shutdown};

#[derive(Parser)]
#[command(name = "portfolio-server")]
#[command(about = "Backend for the portfolio site", long_about = None)]
struct Args {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PortfolioConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability)?;

    tracing::info!("portfolio-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.limits.request_timeout_secs,
        max_body_bytes = config.limits.max_body_bytes,
        resume_owner = %config.resume.owner_name,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
