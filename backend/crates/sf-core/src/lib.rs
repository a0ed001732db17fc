pub mod error;
pub mod models;
pub mod rejection;

pub use error::{CoreError, Result};
pub use models::comment::{Comment, CommentLimits, DEFAULT_MAX_HANDLE_CHARS, DEFAULT_MAX_TEXT_CHARS};
pub use models::denylist::Denylist;
pub use models::envelope::Envelope;
pub use models::identity::Identity;
pub use models::room_id::{DEFAULT_ROOM_ID_LENGTH, MAX_ROOM_ID_LENGTH, ROOM_ID_ALPHABET, RoomId};
pub use rejection::Rejection;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
