pub mod connection;
pub mod heartbeat;
pub mod message;
pub mod registry;

pub use connection::{ClientConnection, Delivery};
pub use heartbeat::{HeartbeatBroadcaster, HeartbeatHandle};
pub use message::{CarnagePayload, WsMessage};
pub use registry::{Broadcast, BroadcastReport, ConnectionRegistry, RegistrationGuard};
