use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::{AppConfig, RealtimeConfig};
use crate::domain::PredictionSource;
use crate::error::Result;
use crate::realtime::{ConnectionRegistry, HeartbeatBroadcaster};

/// Bind the configured address and serve until `shutdown` resolves
pub async fn start_api_server<F>(
    config: &AppConfig,
    source: Arc<dyn PredictionSource>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    run_api_server(listener, source, &config.realtime, shutdown).await
}

/// Serve the API on an already-bound listener.
///
/// Owns the heartbeat task for the lifetime of the server: on shutdown every
/// WebSocket session is closed, then the heartbeat is cancelled and awaited.
pub async fn run_api_server<F>(
    listener: TcpListener,
    source: Arc<dyn PredictionSource>,
    realtime: &RealtimeConfig,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let registry = Arc::new(ConnectionRegistry::new());
    info!(source = source.name(), "using prediction source");

    let app_state = AppState::new(source, Arc::clone(&registry), realtime.clone());
    let heartbeat = HeartbeatBroadcaster::from_config(registry.clone(), realtime).spawn();

    let app = create_router(app_state);

    info!("🚀 API server listening on http://{}", listener.local_addr()?);

    let session_registry = Arc::clone(&registry);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let closed = session_registry.close_all();
            info!(closed, "shutdown requested, closed WebSocket sessions");
        })
        .await;

    heartbeat.shutdown().await;
    info!("🔪 API server shutdown complete");

    served?;
    Ok(())
}
