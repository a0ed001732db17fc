//! Coarse requester fingerprint.
//!
//! Used only to key the submission cooldown ledger. It is not unique per
//! person and is not an authentication boundary: viewers behind one NAT with
//! the same handle share a cooldown, and anyone can pick any handle.

use std::fmt;
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Combine the requester's network origin with a lowercased handle
    pub fn new(origin: &str, handle: &str) -> Self {
        let handle = handle.trim().to_lowercase();
        Self(format!("{}|{}", origin_ip(origin), handle))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduce an origin string to its address, dropping any port
fn origin_ip(origin: &str) -> String {
    let origin = origin.trim();

    if let Ok(addr) = origin.parse::<SocketAddr>() {
        return addr.ip().to_string();
    }
    if let Ok(ip) = origin.parse::<IpAddr>() {
        return ip.to_string();
    }
    match origin.rsplit_once(':') {
        // host:port where host is not itself an unbracketed v6 address
        Some((host, port)) if !host.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => {
            host.to_string()
        }
        _ => origin.to_string(),
    }
}
