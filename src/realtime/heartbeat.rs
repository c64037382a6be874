//! Periodic heartbeat broadcast to every connected client.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use super::{Broadcast, BroadcastReport, WsMessage};
use crate::config::RealtimeConfig;
use crate::error::Result;

pub struct HeartbeatBroadcaster {
    target: Arc<dyn Broadcast>,
    interval: Duration,
    error_cooldown: Duration,
}

impl HeartbeatBroadcaster {
    pub fn new(target: Arc<dyn Broadcast>, interval: Duration, error_cooldown: Duration) -> Self {
        Self {
            target,
            interval,
            error_cooldown,
        }
    }

    pub fn from_config(target: Arc<dyn Broadcast>, config: &RealtimeConfig) -> Self {
        Self::new(target, config.heartbeat_interval(), config.error_cooldown())
    }

    /// Compose one heartbeat with the current client count and broadcast it
    pub fn beat(&self) -> Result<BroadcastReport> {
        let message = WsMessage::heartbeat(self.target.client_count());
        self.target.broadcast(&message)
    }

    /// Beat immediately, then every `interval`, until `cancel` fires.
    ///
    /// A failed beat is logged and retried after `error_cooldown`; nothing
    /// but cancellation ends the loop.
    pub async fn run(self, cancel: CancellationToken) {
        info!(
            interval_secs = self.interval.as_secs(),
            "heartbeat broadcaster started"
        );

        while !cancel.is_cancelled() {
            let pause = match self.beat() {
                Ok(report) => {
                    if report.pruned > 0 {
                        warn!(pruned = report.pruned, "heartbeat pruned dead clients");
                    }
                    debug!(delivered = report.delivered, dropped = report.dropped, "heartbeat sent");
                    self.interval
                }
                Err(e) => {
                    error!(error = %e, "heartbeat broadcast failed");
                    self.error_cooldown
                }
            };

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(pause) => {}
            }
        }

        info!("heartbeat broadcaster stopped");
    }

    /// Run on a supervised task owned by the returned handle
    pub fn spawn(self) -> HeartbeatHandle {
        let cancel = CancellationToken::new();
        let join = tokio::spawn(self.run(cancel.clone()));
        HeartbeatHandle { cancel, join }
    }
}

/// Owner of the running heartbeat task
pub struct HeartbeatHandle {
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

impl HeartbeatHandle {
    /// Stop the loop and wait for it to finish
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(e) = self.join.await {
            error!(error = %e, "heartbeat task ended abnormally");
        }
    }
}
