//! Requester origin for submission identity

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// Where a request came from: the first `X-Forwarded-For` entry, else the
/// socket peer, else `unknown`. Never rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOrigin(pub String);

impl<S: Send + Sync> FromRequestParts<S> for ClientOrigin {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

impl ClientOrigin {
    pub fn from_parts(parts: &Parts) -> Self {
        let forwarded = parts
            .headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|first| !first.is_empty());

        if let Some(first) = forwarded {
            return Self(first.to_string());
        }

        match parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            Some(ConnectInfo(addr)) => Self(addr.to_string()),
            None => Self(UNKNOWN_ORIGIN.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
