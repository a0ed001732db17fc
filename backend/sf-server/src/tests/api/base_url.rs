use crate::base_url;

use http::{HeaderMap, HeaderValue};

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_static(value));
    }
    map
}

#[test]
fn given_host_only_when_building_then_plain_http() {
    let headers = headers(&[("host", "localhost:8000")]);

    assert_eq!(base_url(&headers), "http://localhost:8000");
}

#[test]
fn given_proxy_headers_when_building_then_they_take_precedence() {
    let headers = headers(&[
        ("host", "10.0.0.5:8000"),
        ("x-forwarded-proto", "https"),
        ("x-forwarded-host", "talk.example.com"),
    ]);

    assert_eq!(base_url(&headers), "https://talk.example.com");
}

#[test]
fn given_trailing_slash_in_host_when_building_then_trimmed() {
    let headers = headers(&[("x-forwarded-host", "example.com/")]);

    assert_eq!(base_url(&headers), "http://example.com");
}
