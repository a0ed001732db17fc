#![allow(dead_code)]

use sf_config::Config;
use sf_core::RoomId;
use sf_server::build_router;
use sf_ws::{AppState, BroadcastMessage, SessionId, ShutdownCoordinator};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Router plus the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(&config, ShutdownCoordinator::new());
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Send one request through the router and decode the JSON body.
    /// Plain-text bodies come back as a JSON string.
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()));

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Method::GET, uri, &[], None).await
    }

    pub async fn post(&self, uri: &str, body: Option<&str>) -> (StatusCode, serde_json::Value) {
        self.send(Method::POST, uri, &[], body).await
    }

    /// Submit a comment as the viewer at `origin`
    pub async fn post_message_from(
        &self,
        room_id: &str,
        origin: &str,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.send(
            Method::POST,
            &format!("/rooms/{room_id}/messages"),
            &[("x-forwarded-for", origin)],
            Some(body),
        )
        .await
    }

    /// Provision a room through the API and return its id
    pub async fn create_room(&self) -> String {
        let (status, json) = self.post("/rooms", None).await;
        assert_eq!(status, StatusCode::CREATED);
        json["roomId"].as_str().unwrap().to_string()
    }

    /// Attach a bare queue to the room's hub as if it were a display session
    pub async fn subscribe(&self, room_id: &str) -> mpsc::Receiver<BroadcastMessage> {
        let room_id = RoomId::parse(room_id).unwrap();
        let hub = self.state.rooms.hub(&room_id).await.unwrap();
        let (tx, rx) = mpsc::channel(16);
        hub.register(SessionId::new(), tx).await.unwrap();
        // Registration is processed before any later command
        hub.subscriber_count().await.unwrap();
        rx
    }
}

/// Next broadcast payload decoded as JSON
pub async fn next_envelope(rx: &mut mpsc::Receiver<BroadcastMessage>) -> serde_json::Value {
    let message = tokio::time::timeout(std::time::Duration::from_secs(1), rx.recv())
        .await
        .expect("broadcast within a second")
        .expect("hub still running");
    serde_json::from_str(&message.payload).unwrap()
}
