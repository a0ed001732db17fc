use axum::body::Bytes;
use axum_test::{TestServer, TestWebSocket, WsMessage};

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
    pub room_id: String,
}

impl WsTestClient {
    /// Connect to a room's display endpoint
    pub async fn connect(server: &TestServer, room_id: &str) -> Self {
        let ws = server
            .get_websocket(&format!("/ws/{room_id}"))
            .await
            .into_websocket()
            .await;

        Self {
            ws,
            room_id: room_id.to_string(),
        }
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        self.ws.send_message(WsMessage::Binary(data.into())).await;
    }

    pub async fn receive_text(&mut self) -> String {
        self.ws.receive_text().await
    }

    /// Next raw frame, control frames included
    pub async fn receive_message(&mut self) -> WsMessage {
        self.ws.receive_message().await
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}
