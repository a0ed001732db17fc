use crate::Identity;

#[test]
fn test_identity_strips_port_and_lowercases_handle() {
    let identity = Identity::new("203.0.113.7:54321", "  Alice ");

    assert_eq!(identity.as_str(), "203.0.113.7|alice");
}

#[test]
fn test_identity_ignores_port_differences() {
    let a = Identity::new("203.0.113.7:1000", "bob");
    let b = Identity::new("203.0.113.7:2000", "BOB");

    assert_eq!(a, b);
}

#[test]
fn test_identity_handles_ipv6_socket_address() {
    let identity = Identity::new("[2001:db8::1]:8080", "x");

    assert_eq!(identity.as_str(), "2001:db8::1|x");
}

#[test]
fn test_identity_keeps_bare_ipv6() {
    let identity = Identity::new("2001:db8::1", "");

    assert_eq!(identity.as_str(), "2001:db8::1|");
}

#[test]
fn test_identity_differs_by_handle() {
    let a = Identity::new("10.0.0.1", "alice");
    let b = Identity::new("10.0.0.1", "bob");

    assert_ne!(a, b);
}

#[test]
fn test_identity_accepts_unknown_origin() {
    let identity = Identity::new("unknown", "alice");

    assert_eq!(identity.as_str(), "unknown|alice");
}
