use crate::{CoreError, ROOM_ID_ALPHABET, RoomId};

use googletest::prelude::*;

#[test]
fn test_generated_room_id_has_requested_length_and_alphabet() {
    let id = RoomId::generate(10);

    assert_that!(id.as_str().len(), eq(10));
    assert!(id.as_str().bytes().all(|b| ROOM_ID_ALPHABET.contains(&b)));
}

#[test]
fn test_generated_room_ids_differ() {
    let a = RoomId::generate(10);
    let b = RoomId::generate(10);

    assert_ne!(a, b);
}

#[test]
fn test_parse_round_trips_generated_id() {
    let id = RoomId::generate(12);

    let parsed = RoomId::parse(id.as_str()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn test_parse_rejects_foreign_characters() {
    let too_long = "a".repeat(65);
    for bad in ["", "abc-def", "../etc", "ルーム", too_long.as_str()] {
        let result = RoomId::parse(bad);
        assert!(
            matches!(result, Err(CoreError::InvalidRoomId { .. })),
            "expected {bad:?} to be rejected"
        );
    }
}
