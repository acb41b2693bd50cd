//! Charge-Rate Cost Engine HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use charge_rate_engine::api::{AppState, create_router};
use charge_rate_engine::config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "charge-rate-server")]
#[command(about = "Apprentice charge-rate cost engine HTTP server")]
struct Args {
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: String,

    /// Directory of rate template YAML files.
    #[arg(long, default_value = "./config/templates")]
    config_dir: String,

    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let config = ConfigLoader::load(&args.config_dir)?;
    let template_count = config.summaries().len();
    let addr: SocketAddr = args.listen.parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        config_dir = %args.config_dir,
        templates = template_count,
        "starting charge-rate server"
    );

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
