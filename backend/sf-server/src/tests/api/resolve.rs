use crate::parse_room_id;

use http::StatusCode;

#[test]
fn given_valid_id_when_parsed_then_ok() {
    let room_id = parse_room_id("AbCdEf1234").unwrap();

    assert_eq!(room_id.as_str(), "AbCdEf1234");
}

#[test]
fn given_malformed_id_when_parsed_then_reported_as_not_found() {
    for raw in ["", "has space", "room-with-dash", "caf\u{e9}"] {
        let error = parse_room_id(raw).unwrap_err();
        assert_eq!(error.status(), StatusCode::NOT_FOUND, "{raw:?}");
    }
}
