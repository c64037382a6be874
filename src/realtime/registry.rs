//! Registry of live WebSocket sessions and fan-out to all of them.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{ClientConnection, Delivery, WsMessage};
use crate::error::Result;

/// Outcome of one broadcast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    /// Clients whose queue was full; they stay connected
    pub dropped: usize,
    /// Connections removed because their session was gone
    pub pruned: usize,
}

/// Fan-out target for server-initiated messages
pub trait Broadcast: Send + Sync {
    fn client_count(&self) -> usize;

    fn broadcast(&self, message: &WsMessage) -> Result<BroadcastReport>;
}

/// Set of currently connected clients, keyed by connection ID.
///
/// Mutation and iteration never hold a shard lock across an await; broadcast
/// works on a snapshot so sessions may unregister concurrently.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: DashMap<String, Arc<ClientConnection>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, connection: Arc<ClientConnection>) {
        debug!(conn_id = %connection.id, "client registered");
        self.connections.insert(connection.id.clone(), connection);
    }

    /// Register `connection` and return a guard that unregisters it on drop
    pub fn register_guarded(
        self: &Arc<Self>,
        connection: Arc<ClientConnection>,
    ) -> RegistrationGuard {
        let id = connection.id.clone();
        self.register(connection);
        RegistrationGuard {
            registry: Arc::clone(self),
            id,
        }
    }

    /// Remove a connection. Removing an absent ID is a no-op.
    pub fn unregister(&self, connection_id: &str) -> bool {
        let removed = self.connections.remove(connection_id).is_some();
        if removed {
            debug!(conn_id = connection_id, "client unregistered");
        }
        removed
    }

    pub fn contains(&self, connection_id: &str) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn snapshot(&self) -> Vec<Arc<ClientConnection>> {
        self.connections
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Send `message` to every registered client.
    ///
    /// A client whose session is gone is unregistered and closed; a client
    /// whose queue is full just misses this frame. Only serialization fails
    /// the call.
    pub fn broadcast(&self, message: &WsMessage) -> Result<BroadcastReport> {
        let json = serde_json::to_string(message)?;
        let mut report = BroadcastReport::default();

        for conn in self.snapshot() {
            match conn.offer(json.clone()) {
                Delivery::Queued => report.delivered += 1,
                Delivery::Dropped => {
                    debug!(conn_id = %conn.id, kind = message.kind(), "client queue full, frame dropped");
                    report.dropped += 1;
                }
                Delivery::Closed => {
                    warn!(conn_id = %conn.id, kind = message.kind(), "session gone, pruning client");
                    self.unregister(&conn.id);
                    conn.close();
                    report.pruned += 1;
                }
            }
        }

        debug!(
            kind = message.kind(),
            delivered = report.delivered,
            dropped = report.dropped,
            pruned = report.pruned,
            "broadcast complete"
        );
        Ok(report)
    }

    /// Close every session and clear the registry. Returns how many were closed.
    pub fn close_all(&self) -> usize {
        let conns = self.snapshot();
        for conn in &conns {
            self.unregister(&conn.id);
            conn.close();
        }
        conns.len()
    }
}

impl Broadcast for ConnectionRegistry {
    fn client_count(&self) -> usize {
        self.len()
    }

    fn broadcast(&self, message: &WsMessage) -> Result<BroadcastReport> {
        ConnectionRegistry::broadcast(self, message)
    }
}

/// Unregisters its connection exactly once, when dropped
#[must_use = "dropping the guard unregisters the connection"]
pub struct RegistrationGuard {
    registry: Arc<ConnectionRegistry>,
    id: String,
}

impl RegistrationGuard {
    pub fn connection_id(&self) -> &str {
        &self.id
    }
}

impl Drop for RegistrationGuard {
    fn drop(&mut self) {
        self.registry.unregister(&self.id);
    }
}
