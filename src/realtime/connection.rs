//! WebSocket client connection state.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use uuid::Uuid;

use super::WsMessage;
use crate::error::{ButcherError, Result};

/// Result of a non-blocking enqueue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Queued,
    /// Queue full; this frame was dropped for this client only
    Dropped,
    /// Session gone; the client should be pruned
    Closed,
}

/// One live `/ws/props` session.
///
/// Outbound frames go through a bounded queue drained by the session's writer
/// task; the cancellation token tears the session down from outside (pruning,
/// shutdown).
pub struct ClientConnection {
    /// Unique connection ID
    pub id: String,
    tx: mpsc::Sender<String>,
    cancel: CancellationToken,
    pub connected_at: DateTime<Utc>,
    dropped_messages: AtomicU64,
}

impl ClientConnection {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), tx)
    }

    pub fn with_id(id: impl Into<String>, tx: mpsc::Sender<String>) -> Self {
        Self {
            id: id.into(),
            tx,
            cancel: CancellationToken::new(),
            connected_at: Utc::now(),
            dropped_messages: AtomicU64::new(0),
        }
    }

    /// Queue a text frame without waiting. Used for fan-out.
    pub fn offer(&self, text: String) -> Delivery {
        if self.is_closed() {
            return Delivery::Closed;
        }
        match self.tx.try_send(text) {
            Ok(()) => Delivery::Queued,
            Err(TrySendError::Full(_)) => {
                self.dropped_messages.fetch_add(1, Ordering::Relaxed);
                Delivery::Dropped
            }
            Err(TrySendError::Closed(_)) => Delivery::Closed,
        }
    }

    /// Queue a frame, waiting for space if the writer is behind.
    ///
    /// Fails only once the session is closed.
    pub async fn send(&self, text: String) -> Result<()> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ButcherError::SessionClosed(self.id.clone())),
            sent = self.tx.send(text) => {
                sent.map_err(|_| ButcherError::SessionClosed(self.id.clone()))
            }
        }
    }

    /// Serialize and queue a message for this client only
    pub async fn send_message(&self, message: &WsMessage) -> Result<()> {
        let json = serde_json::to_string(message)?;
        self.send(json).await
    }

    /// Ask the session to shut down. Idempotent.
    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once `close` has been called
    pub fn closed(&self) -> WaitForCancellationFuture<'_> {
        self.cancel.cancelled()
    }

    /// Broadcast frames skipped because the queue was full
    pub fn drop_count(&self) -> u64 {
        self.dropped_messages.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for ClientConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConnection")
            .field("id", &self.id)
            .field("connected_at", &self.connected_at)
            .field("closed", &self.is_closed())
            .finish()
    }
}
