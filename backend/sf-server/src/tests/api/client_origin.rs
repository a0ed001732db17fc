use crate::{ClientOrigin, UNKNOWN_ORIGIN};

use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use googletest::assert_that;
use googletest::prelude::eq;
use http::Request;

fn parts_with(forwarded_for: Option<&str>, peer: Option<SocketAddr>) -> http::request::Parts {
    let mut builder = Request::builder().uri("/rooms/abcdefghij/messages");
    if let Some(value) = forwarded_for {
        builder = builder.header("X-Forwarded-For", value);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    if let Some(addr) = peer {
        parts.extensions.insert(ConnectInfo(addr));
    }
    parts
}

#[test]
fn given_forwarded_chain_when_extracted_then_first_entry_wins() {
    // Given
    let peer: SocketAddr = "10.0.0.1:5000".parse().unwrap();
    let parts = parts_with(Some(" 203.0.113.7 , 10.0.0.1"), Some(peer));

    // When
    let origin = ClientOrigin::from_parts(&parts);

    // Then
    assert_that!(origin.as_str(), eq("203.0.113.7"));
}

#[test]
fn given_no_forwarded_header_when_extracted_then_peer_address_used() {
    let peer: SocketAddr = "192.0.2.10:41000".parse().unwrap();
    let parts = parts_with(None, Some(peer));

    let origin = ClientOrigin::from_parts(&parts);

    assert_that!(origin.as_str(), eq("192.0.2.10:41000"));
}

#[test]
fn given_empty_forwarded_header_when_extracted_then_falls_back() {
    let parts = parts_with(Some(""), None);

    let origin = ClientOrigin::from_parts(&parts);

    assert_that!(origin.as_str(), eq(UNKNOWN_ORIGIN));
}

#[test]
fn given_nothing_known_when_extracted_then_unknown() {
    let parts = parts_with(None, None);

    let origin = ClientOrigin::from_parts(&parts);

    assert_that!(origin.as_str(), eq(UNKNOWN_ORIGIN));
}
