use super::{ConnectionInfo, ForwardError, resolve};
use crate::addr::HostPort;
use crate::headers::{HeaderMap, HeaderName, HeaderValue};

fn info() -> ConnectionInfo {
    ConnectionInfo::new(
        HostPort::from_static("server.local", 8080),
        HostPort::from_static("10.0.0.7", 51234),
    )
}

fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(
            HeaderName::from_slice(name).unwrap(),
            HeaderValue::from_string(value),
        );
    }
    map
}

#[test]
fn no_forwarding_headers_is_identity() {
    let info = info();
    assert_eq!(resolve(&info, &HeaderMap::new()).unwrap(), info);

    let unrelated = headers(&[("host", "server.local"), ("accept", "*/*")]);
    assert_eq!(resolve(&info, &unrelated).unwrap(), info);
}

#[test]
fn forwarded_all_params() {
    let headers = headers(&[("Forwarded", "proto=https;host=example.com:8443;for=9.9.9.9")]);
    let resolved = resolve(&info(), &headers).unwrap();

    assert_eq!(resolved.scheme(), "https");
    assert_eq!(resolved.host_name(), "example.com");
    assert_eq!(resolved.host_port(), 8443);
    // `for` keeps the current remote port as default
    assert_eq!(resolved.remote_address().host(), &"9.9.9.9");
    assert_eq!(resolved.remote_address().port(), 51234);
}

#[test]
fn forwarded_quoted_params() {
    let headers = headers(&[(
        "Forwarded",
        r#"for="[2001:db8:cafe::17]:4711";proto="https";host="example.com""#,
    )]);
    let resolved = resolve(&info(), &headers).unwrap();

    assert_eq!(resolved.scheme(), "https");
    assert_eq!(resolved.host_name(), "example.com");
    assert_eq!(resolved.remote_address().host(), &"2001:db8:cafe::17");
    assert_eq!(resolved.remote_address().port(), 4711);
}

#[test]
fn forwarded_host_port_follows_updated_scheme() {
    // scheme updated in the same header, host without explicit port
    let headers = headers(&[("Forwarded", "proto=https;host=example.com")]);
    let resolved = resolve(&info(), &headers).unwrap();
    assert_eq!(resolved.host_port(), 443);

    // no proto param, plain scheme default
    let headers = self::headers(&[("Forwarded", "host=example.com")]);
    let resolved = resolve(&info(), &headers).unwrap();
    assert_eq!(resolved.host_port(), 80);
}

#[test]
fn forwarded_uses_nearest_hop_only() {
    let headers = headers(&[("Forwarded", "for=9.9.9.9, for=8.8.8.8;proto=https")]);
    let resolved = resolve(&info(), &headers).unwrap();

    assert_eq!(resolved.remote_address().host(), &"9.9.9.9");
    // the later element's proto is ignored
    assert_eq!(resolved.scheme(), "http");
}

#[test]
fn forwarded_suppresses_x_forwarded() {
    let headers = headers(&[
        ("Forwarded", "proto=https"),
        ("X-Forwarded-For", "1.2.3.4"),
        ("X-Forwarded-Host", "other.example"),
        ("X-Forwarded-Port", "9999"),
        ("X-Forwarded-Prefix", "/api"),
    ]);
    let base = info();
    let resolved = resolve(&base, &headers).unwrap();

    assert_eq!(resolved.scheme(), "https");
    assert_eq!(resolved.host_address(), base.host_address());
    assert_eq!(resolved.remote_address(), base.remote_address());
    assert_eq!(resolved.forwarded_prefix(), "");
}

#[test]
fn x_forwarded_for_first_element() {
    let headers = headers(&[("X-Forwarded-For", "1.2.3.4, 5.6.6.6")]);
    let resolved = resolve(&info(), &headers).unwrap();

    assert_eq!(resolved.remote_address().host(), &"1.2.3.4");
    // port unchanged from the prior remote address
    assert_eq!(resolved.remote_address().port(), 51234);
}

#[test]
fn x_forwarded_proto() {
    let headers = headers(&[("X-Forwarded-Proto", "https")]);
    let resolved = resolve(&info(), &headers).unwrap();
    assert_eq!(resolved.scheme(), "https");
    // scheme and port are updated independently
    assert_eq!(resolved.host_port(), 8080);

    // invalid scheme is ignored, not an error
    let headers = self::headers(&[("X-Forwarded-Proto", "1nv@lid")]);
    let resolved = resolve(&info(), &headers).unwrap();
    assert_eq!(resolved.scheme(), "http");
}

#[test]
fn x_forwarded_host() {
    let headers = headers(&[
        ("X-Forwarded-Proto", "https"),
        ("X-Forwarded-Host", "example.com"),
    ]);
    let resolved = resolve(&info(), &headers).unwrap();

    // default port derives from the already-updated scheme
    assert_eq!(resolved.host_name(), "example.com");
    assert_eq!(resolved.host_port(), 443);
}

#[test]
fn x_forwarded_port() {
    let headers = headers(&[("X-Forwarded-Port", "8443")]);
    let resolved = resolve(&info(), &headers).unwrap();

    // hostname preserved, port replaced
    assert_eq!(resolved.host_name(), "server.local");
    assert_eq!(resolved.host_port(), 8443);
}

#[test]
fn x_forwarded_port_invalid() {
    let headers = headers(&[("X-Forwarded-Port", "abc")]);
    assert_eq!(resolve(&info(), &headers), Err(ForwardError::InvalidPort));
}

#[test]
fn x_forwarded_prefix() {
    let headers = headers(&[("X-Forwarded-Prefix", "/a//, /b/")]);
    let resolved = resolve(&info(), &headers).unwrap();
    assert_eq!(resolved.forwarded_prefix(), "/a/b");

    let headers = self::headers(&[("X-Forwarded-Prefix", "/")]);
    let resolved = resolve(&info(), &headers).unwrap();
    assert_eq!(resolved.forwarded_prefix(), "/");
}

#[test]
fn x_forwarded_prefix_invalid() {
    let headers = headers(&[("X-Forwarded-Prefix", "b")]);
    assert_eq!(resolve(&info(), &headers), Err(ForwardError::InvalidPrefix));
}

#[test]
fn x_forwarded_combined() {
    let headers = headers(&[
        ("X-Forwarded-For", "9.9.9.9"),
        ("X-Forwarded-Proto", "https"),
        ("X-Forwarded-Host", "example.com"),
        ("X-Forwarded-Port", "8443"),
        ("X-Forwarded-Prefix", "/app"),
    ]);
    let resolved = resolve(&info(), &headers).unwrap();

    assert_eq!(resolved.scheme(), "https");
    assert_eq!(resolved.host_name(), "example.com");
    assert_eq!(resolved.host_port(), 8443);
    assert_eq!(resolved.remote_address().host(), &"9.9.9.9");
    assert_eq!(resolved.remote_address().port(), 51234);
    assert_eq!(resolved.forwarded_prefix(), "/app");
}

#[test]
fn resolve_does_not_mutate_input() {
    let base = info();
    let headers = headers(&[("X-Forwarded-Proto", "https")]);
    let _ = resolve(&base, &headers).unwrap();
    assert_eq!(base, info());
}
