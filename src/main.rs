//! Platebook server
//!
//! Run with: cargo run --bin platebook -- --config platebook.toml
//!
//! # Configuration
//!
//! See `platebook-cli config` for the file format. Environment variables:
//! - `PLATEBOOK_SITE_ROOT`: Host pages and assets (default: ./site)
//! - `PLATEBOOK_REVIEWS`: Review document path or URL (default: reviews.json)
//! - `PLATEBOOK_HOST` / `PLATEBOOK_PORT`: Bind address (default: 0.0.0.0:8080)
//! - `PLATEBOOK_LOG_LEVEL` / `PLATEBOOK_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely

use clap::Parser;
use platebook::config::Config;
use platebook::logging::init_logging;
use platebook::server::{serve, AppState};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "platebook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Platebook review site")]
struct Args {
    /// Config file (default: platform config dir, then ./platebook.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the site root
    #[arg(long)]
    site: Option<String>,

    /// Override the listening port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(site) = args.site {
        config.site.root = site;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting Platebook v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Site root: {}", config.site.root);
    tracing::info!("Review document: {}", config.site.reviews);

    let state = AppState::from_config(&config)?;
    serve(state, &config.server).await?;

    tracing::info!("Platebook stopped");
    Ok(())
}
