use butcher::adapters::{start_api_server, SampleDataStore};
use butcher::config::AppConfig;
use butcher::error::{ButcherError, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

mod main_runtime;

use main_runtime::{init_logging, shutdown_signal};

#[derive(Parser)]
#[command(name = "butcher")]
#[command(version)]
#[command(about = "Sports prediction and parlay API with a live WebSocket feed", long_about = None)]
struct Cli {
    /// Directory holding default.toml and per-environment overrides
    #[arg(short, long, default_value = "config", env = "BUTCHER_CONFIG_DIR")]
    config_dir: String,

    /// Override server.host
    #[arg(long)]
    host: Option<String>,

    /// Override server.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Emit JSON formatted logs
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config_dir)?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.json_logs {
        config.logging.json = true;
    }

    let _log_guard = init_logging(&config.logging);

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!("Invalid configuration: {}", e);
        }
        return Err(ButcherError::Validation(errors.join("; ")));
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        heartbeat_secs = config.realtime.heartbeat_interval_secs,
        "🥩 starting butcher"
    );

    let source = Arc::new(SampleDataStore::new());
    start_api_server(&config, source, shutdown_signal()).await
}
