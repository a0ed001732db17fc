use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::fmt;
use std::panic::Location;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const ROOM_ID_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const DEFAULT_ROOM_ID_LENGTH: usize = 10;
pub const MAX_ROOM_ID_LENGTH: usize = 64;

/// Opaque random room token over a fixed alphanumeric alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Draw a fresh id of `length` characters. Uniqueness is the registry's job.
    pub fn generate(length: usize) -> Self {
        let mut rng = rand::rng();
        let id = (0..length)
            .map(|_| ROOM_ID_ALPHABET[rng.random_range(0..ROOM_ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    #[track_caller]
    pub fn parse(value: &str) -> CoreResult<Self> {
        let valid = !value.is_empty()
            && value.len() <= MAX_ROOM_ID_LENGTH
            && value.bytes().all(|b| ROOM_ID_ALPHABET.contains(&b));

        if !valid {
            return Err(CoreError::InvalidRoomId {
                value: value.chars().take(MAX_ROOM_ID_LENGTH).collect(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
