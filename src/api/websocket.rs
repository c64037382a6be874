use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitStream, StreamExt},
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::state::AppState;
use crate::error::{ButcherError, Result};
use crate::realtime::{ClientConnection, WsMessage};

/// WS /ws/props
pub async fn props_feed_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<String>(state.realtime.client_buffer.max(1));

    let conn = Arc::new(ClientConnection::new(tx));
    let registration = state.registry.register_guarded(Arc::clone(&conn));
    info!(conn_id = %conn.id, clients = state.registry.len(), "WebSocket client connected");

    // Single writer: drains the outbound queue into the socket until the
    // session is closed or the transport fails
    let writer_conn = Arc::clone(&conn);
    let writer = tokio::spawn(async move {
        loop {
            let text = tokio::select! {
                _ = writer_conn.closed() => break,
                next = rx.recv() => match next {
                    Some(text) => text,
                    None => break,
                },
            };

            tokio::select! {
                _ = writer_conn.closed() => break,
                sent = sender.send(Message::Text(text)) => {
                    if let Err(e) = sent {
                        let e = ButcherError::from(e);
                        debug!(conn_id = %writer_conn.id, error = %e, "WebSocket send failed");
                        break;
                    }
                }
            }
        }

        writer_conn.close();
        let _ = sender.close().await;
    });

    match greet(&conn, &state).await {
        Ok(()) => echo_until_closed(&conn, &mut receiver).await,
        Err(e) => debug!(conn_id = %conn.id, error = %e, "greeting not delivered"),
    }

    conn.close();
    let _ = writer.await;
    drop(registration);

    info!(
        conn_id = %conn.id,
        clients = state.registry.len(),
        dropped = conn.drop_count(),
        "WebSocket client disconnected"
    );
}

/// Welcome frame, then one sample update built from the data source
async fn greet(conn: &ClientConnection, state: &AppState) -> Result<()> {
    conn.send_message(&WsMessage::welcome()).await?;

    match state.source.predictions().await {
        Ok(predictions) => {
            if let Some(sample) = predictions.first() {
                conn.send_message(&WsMessage::carnage_update(sample)).await?;
            }
        }
        Err(e) => warn!(conn_id = %conn.id, error = %e, "sample update unavailable"),
    }
    Ok(())
}

/// Echo every inbound text frame until the client leaves or the server
/// closes the session. Echoes wait for queue space, so a burst only slows
/// this reader down.
async fn echo_until_closed(conn: &ClientConnection, receiver: &mut SplitStream<WebSocket>) {
    loop {
        tokio::select! {
            _ = conn.closed() => {
                debug!(conn_id = %conn.id, "session closed by server");
                break;
            }
            frame = receiver.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    if let Err(e) = conn.send_message(&WsMessage::echo(text)).await {
                        debug!(conn_id = %conn.id, error = %e, "echo not delivered");
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {
                    // Binary frames are ignored; axum answers pings itself
                }
                Some(Err(e)) => {
                    let e = ButcherError::from(e);
                    debug!(conn_id = %conn.id, error = %e, "WebSocket receive failed");
                    break;
                }
            }
        }
    }
}
