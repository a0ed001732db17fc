pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    admin::{self, PauseResponse, SlowModeRequest, SlowModeResponse},
    base_url::base_url,
    client_origin::{ClientOrigin, UNKNOWN_ORIGIN},
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    messages::{self, OkResponse, PostMessageRequest},
    resolve::{parse_room_id, resolve_room},
    rooms::{self, CreateRoomResponse, RoomStatusResponse},
};
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
