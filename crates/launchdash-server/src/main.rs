mod dto;
mod error;
mod handlers;
mod routes;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use launchdash_core::{Dashboard, DashboardConfig, DEFAULT_DATA_PATH};
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::AppState;

#[derive(Parser)]
#[command(name = "launchdash")]
#[command(about = "SpaceX launch records dashboard", long_about = None)]
struct ServerArgs {
    /// Launch records CSV
    #[arg(long, env = "LAUNCHDASH_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8050")]
    port: u16,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = ServerArgs::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .compact()
        .init();

    let config = DashboardConfig::with_data_path(&args.data);
    let dashboard = Dashboard::load(&config)
        .with_context(|| format!("Failed to load launch records from {}", args.data.display()))?;

    let state = Arc::new(AppState::new(dashboard));
    let app = routes::router(state);

    let addr = format!("{}:{}", args.host, args.port);
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
