//! One live subscriber connection.
//!
//! Two pumps share the socket. The outbound pump is the only writer: it
//! drains the hub-fed queue and sends keepalive pings. The inbound pump
//! reads frames under a rolling deadline and relays text back onto the
//! hub. Either side failing ends the session; the hub and other sessions
//! are unaffected.

use crate::{
    BroadcastMessage, ConnectionConfig, HubHandle, Metrics, RelayRateLimiter,
    Result as WsErrorResult, SessionId, ShutdownGuard, WsError,
};

use sf_core::{ErrorLocation, RoomId};

use std::panic::Location;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at, timeout, timeout_at};

pub struct Session {
    session_id: SessionId,
    room_id: RoomId,
    hub: HubHandle,
    config: ConnectionConfig,
    metrics: Metrics,
    rate_limiter: RelayRateLimiter,
}

impl Session {
    pub fn new(
        session_id: SessionId,
        hub: HubHandle,
        config: ConnectionConfig,
        metrics: Metrics,
        rate_limiter: RelayRateLimiter,
    ) -> Self {
        Self {
            session_id,
            room_id: hub.room_id().clone(),
            hub,
            config,
            metrics,
            rate_limiter,
        }
    }

    /// Drive the session until the peer leaves, a pump fails, the hub
    /// evicts it or shutdown is signalled
    pub async fn run(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        info!(
            "Session {} established in room {}",
            self.session_id, self.room_id
        );
        self.metrics.connection_established();

        let (ws_sender, mut ws_receiver) = socket.split();
        let (tx, rx) = mpsc::channel::<BroadcastMessage>(self.config.send_buffer_size);

        // The hub holds the only sender from here on
        if let Err(e) = self.hub.register(self.session_id, tx).await {
            self.metrics.connection_closed("error");
            return Err(e);
        }

        let mut writer = tokio::spawn(outbound_pump(
            ws_sender,
            rx,
            self.config.heartbeat_interval(),
            self.config.write_timeout(),
            self.metrics.clone(),
        ));

        let read_timeout = self.config.heartbeat_timeout();
        let mut deadline = Instant::now() + read_timeout;

        let (result, writer_done) = loop {
            tokio::select! {
                frame = timeout_at(deadline, ws_receiver.next()) => {
                    match frame {
                        Err(_) => {
                            break (Err(WsError::connection_lost(format!(
                                "no frame within {}s",
                                read_timeout.as_secs()
                            ))), false);
                        }
                        Ok(None) => {
                            info!("Session {} closed by client", self.session_id);
                            break (Ok(()), false);
                        }
                        Ok(Some(Err(e))) => {
                            break (Err(WsError::connection_lost(format!("read failed: {e}"))), false);
                        }
                        Ok(Some(Ok(msg))) => {
                            deadline = Instant::now() + read_timeout;
                            match self.handle_client_message(msg).await {
                                Ok(true) => {}
                                Ok(false) => break (Ok(()), false),
                                Err(e) => break (Err(e), false),
                            }
                        }
                    }
                }

                joined = &mut writer => {
                    let result = match joined {
                        Ok(result) => result,
                        Err(e) => Err(WsError::Internal {
                            message: format!("outbound pump panicked: {e}"),
                            location: ErrorLocation::from(Location::caller()),
                        }),
                    };
                    break (result, true);
                }

                _ = shutdown_guard.wait() => {
                    info!("Shutting down session {} gracefully", self.session_id);
                    break (Ok(()), false);
                }
            }
        };

        // Unregistering drops the hub's sender, which lets the writer send
        // its close frame and exit
        if let Err(e) = self.hub.unregister(self.session_id).await {
            warn!("Session {} could not leave hub: {e}", self.session_id);
        }
        if !writer_done && timeout(self.config.write_timeout(), &mut writer).await.is_err() {
            writer.abort();
        }

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        info!(
            "Session {} closed in room {}",
            self.session_id, self.room_id
        );

        result
    }

    /// Returns false when the peer asked to close
    async fn handle_client_message(&self, msg: Message) -> WsErrorResult<bool> {
        match msg {
            Message::Text(text) => self.relay(text.as_str()).await?,
            Message::Binary(data) => match std::str::from_utf8(&data) {
                Ok(text) => self.relay(text).await?,
                Err(_) => {
                    debug!(
                        "Dropping non-UTF-8 binary frame ({} bytes) from session {}",
                        data.len(),
                        self.session_id
                    );
                    self.metrics.relay_dropped("binary");
                }
            },
            // Keepalive traffic only renews the read deadline
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Close(_) => {
                info!("Received close frame from session {}", self.session_id);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Put raw subscriber input back on the bus, unmodified
    async fn relay(&self, text: &str) -> WsErrorResult<()> {
        self.metrics.relay_received();

        if text.len() > self.config.max_frame_bytes {
            warn!(
                "Dropping oversized frame ({} bytes) from session {}",
                text.len(),
                self.session_id
            );
            self.metrics.relay_dropped("oversized");
            return Ok(());
        }

        if let Err(e) = self.rate_limiter.check() {
            warn!("Session {} relay dropped: {e}", self.session_id);
            self.metrics.relay_dropped("rate_limited");
            return Ok(());
        }

        self.hub.publish(BroadcastMessage::relay(text)).await
    }
}

/// Sole writer to the socket
async fn outbound_pump(
    mut ws_sender: SplitSink<WebSocket, Message>,
    mut rx: mpsc::Receiver<BroadcastMessage>,
    heartbeat_interval: Duration,
    write_timeout: Duration,
    metrics: Metrics,
) -> WsErrorResult<()> {
    let mut heartbeat = interval_at(Instant::now() + heartbeat_interval, heartbeat_interval);

    loop {
        tokio::select! {
            queued = rx.recv() => match queued {
                Some(msg) => {
                    let frame = Message::Text(msg.payload.to_string().into());
                    write_frame(&mut ws_sender, frame, write_timeout).await?;
                    metrics.message_sent(msg.message_type);
                }
                None => {
                    // Queue closed by the hub: left the room or evicted
                    if let Err(e) = write_frame(&mut ws_sender, Message::Close(None), write_timeout).await {
                        debug!("Close frame not delivered: {e}");
                    }
                    return Ok(());
                }
            },

            _ = heartbeat.tick() => {
                write_frame(&mut ws_sender, Message::Ping(Bytes::new()), write_timeout).await?;
            }
        }
    }
}

async fn write_frame(
    ws_sender: &mut SplitSink<WebSocket, Message>,
    msg: Message,
    write_timeout: Duration,
) -> WsErrorResult<()> {
    match timeout(write_timeout, ws_sender.send(msg)).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            error!("WebSocket write failed: {e}");
            Err(WsError::connection_lost(format!("write failed: {e}")))
        }
        Err(_) => Err(WsError::connection_lost(format!(
            "write timed out after {}s",
            write_timeout.as_secs()
        ))),
    }
}
