use crate::{admin, health, messages, rooms};

use sf_ws::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Display surfaces
        .route("/ws/{room_id}", get(sf_ws::handler))
        // Provisioning
        .route("/rooms", post(rooms::create_room))
        .route("/rooms/{room_id}", get(rooms::get_room))
        // Submission
        .route("/rooms/{room_id}/messages", post(messages::post_message))
        // Presenter controls
        .route("/rooms/{room_id}/pause", post(admin::pause))
        .route("/rooms/{room_id}/resume", post(admin::resume))
        .route("/rooms/{room_id}/clear", post(admin::clear))
        .route("/rooms/{room_id}/slowmode", post(admin::set_slow_mode))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // The submission page may be served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
