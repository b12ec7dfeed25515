//! Trusted client connection metadata derived from forwarding headers.
//!
//! A reverse proxy in front of the server rewrites the transport-level view
//! of a connection: the scheme the client used, the host it addressed, its
//! remote address and an optional path prefix all arrive in `Forwarded` /
//! `X-Forwarded-*` headers. [`resolve`] maps the raw [`ConnectionInfo`] the
//! transport produced plus the inbound headers to the client-visible one,
//! validating the untrusted input on the way.
use crate::{
    ByteStr,
    addr::{HostPort, parse_address},
    headers::{HeaderMap, standard},
    log::trace,
};

mod parse;

pub mod error;

pub use error::ForwardError;

#[cfg(test)]
mod test;

/// Resolved, client-visible connection descriptor.
///
/// Created once per connection by the transport layer with raw socket
/// addresses, then refined by at most one [`resolve`] call per request.
/// Mutators return a new instance, there is no in-place mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionInfo {
    scheme: ByteStr,
    host: HostPort,
    remote: HostPort,
    forwarded_prefix: ByteStr,
}

impl ConnectionInfo {
    /// Create new [`ConnectionInfo`] with the `"http"` scheme and no prefix.
    pub const fn new(host: HostPort, remote: HostPort) -> Self {
        Self {
            scheme: ByteStr::from_static("http"),
            host,
            remote,
            forwarded_prefix: ByteStr::new(),
        }
    }

    /// Returns the scheme, e.g: `"https"`.
    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the server-side host as seen by the client.
    #[inline]
    pub const fn host_address(&self) -> &HostPort {
        &self.host
    }

    /// Returns the host name of the host address.
    #[inline]
    pub fn host_name(&self) -> &str {
        self.host.host()
    }

    /// Returns the port of the host address.
    #[inline]
    pub const fn host_port(&self) -> u16 {
        self.host.port()
    }

    /// Returns the originating client address.
    #[inline]
    pub const fn remote_address(&self) -> &HostPort {
        &self.remote
    }

    /// Returns the path prefix applied by an upstream proxy, possibly empty.
    #[inline]
    pub fn forwarded_prefix(&self) -> &str {
        &self.forwarded_prefix
    }

    /// Returns a new instance with the given scheme.
    #[inline]
    pub fn with_scheme(self, scheme: ByteStr) -> Self {
        Self { scheme, ..self }
    }

    /// Returns a new instance with the given host address.
    #[inline]
    pub fn with_host_address(self, host: HostPort) -> Self {
        Self { host, ..self }
    }

    /// Returns a new instance with the given remote address.
    #[inline]
    pub fn with_remote_address(self, remote: HostPort) -> Self {
        Self { remote, ..self }
    }

    /// Returns a new instance with the given forwarded prefix.
    #[inline]
    pub fn with_forwarded_prefix(self, forwarded_prefix: ByteStr) -> Self {
        Self {
            forwarded_prefix,
            ..self
        }
    }

    /// Returns the default port for a scheme: `443` for `https`/`wss`,
    /// otherwise `80`.
    pub fn default_host_port(scheme: &str) -> u16 {
        if scheme.eq_ignore_ascii_case("https") || scheme.eq_ignore_ascii_case("wss") {
            443
        } else {
            80
        }
    }
}

// ===== Resolution =====

/// Derive client-visible connection metadata from forwarding headers.
///
/// When the `Forwarded` header is present it is used exclusively and every
/// `X-Forwarded-*` header is ignored, even when also present. Without any
/// forwarding header the input is returned unchanged.
///
/// Pure: never mutates `info` or `headers`, and is evaluated at most once per
/// request.
///
/// # Errors
///
/// Returns an input-validation error for a malformed port, prefix or
/// address; the caller decides whether to reject the request or keep the
/// unmodified info.
pub fn resolve(info: &ConnectionInfo, headers: &HeaderMap) -> Result<ConnectionInfo, ForwardError> {
    match headers.get(standard::FORWARDED) {
        Some(value) => resolve_forwarded(info, value.as_str()),
        None => resolve_x_forwarded(info, headers),
    }
}

/// `Forwarded` header, [RFC7239](https://www.rfc-editor.org/rfc/rfc7239).
///
/// Only the first comma-separated element (the nearest hop) is considered.
/// The `proto`, `host` and `for` parameters are searched independently, each
/// optional, quoted or unquoted.
fn resolve_forwarded(
    info: &ConnectionInfo,
    header: &str,
) -> Result<ConnectionInfo, ForwardError> {
    let forwarded = match header.split_once(',') {
        Some((first, _)) => first,
        None => header,
    };
    let mut info = info.clone();

    if let Some(proto) = parse::find_proto_param(forwarded) {
        info = info.with_scheme(ByteStr::copy_from_str(proto));
    }
    if let Some(host) = parse::find_param(forwarded, "host=") {
        let default_port = ConnectionInfo::default_host_port(info.scheme());
        info = info.with_host_address(parse_address(host, default_port)?);
    }
    if let Some(peer) = parse::find_param(forwarded, "for=") {
        let default_port = info.remote_address().port();
        info = info.with_remote_address(parse_address(peer, default_port)?);
    }

    Ok(info)
}

/// Legacy `X-Forwarded-*` headers, each independently optional.
///
/// Comma-separated values use only their first element, mirroring the
/// nearest-hop convention of the `Forwarded` case.
fn resolve_x_forwarded(
    info: &ConnectionInfo,
    headers: &HeaderMap,
) -> Result<ConnectionInfo, ForwardError> {
    let mut info = info.clone();

    if let Some(value) = headers.get(standard::X_FORWARDED_FOR) {
        let default_port = info.remote_address().port();
        let peer = parse::first_element(value.as_str());
        info = info.with_remote_address(parse_address(peer, default_port)?);
    }

    if let Some(value) = headers.get(standard::X_FORWARDED_PROTO) {
        let proto = parse::first_element(value.as_str());
        if parse::is_scheme(proto) {
            // the host port is deliberately not recomputed here
            info = info.with_scheme(ByteStr::copy_from_str(proto));
        } else {
            trace!("ignoring invalid x-forwarded-proto: {proto:?}");
        }
    }

    if let Some(value) = headers.get(standard::X_FORWARDED_HOST) {
        let default_port = ConnectionInfo::default_host_port(info.scheme());
        let host = parse::first_element(value.as_str());
        info = info.with_host_address(parse_address(host, default_port)?);
    }

    if let Some(value) = headers.get(standard::X_FORWARDED_PORT) {
        if !value.as_str().is_empty() {
            let port = parse::parse_port(parse::first_element(value.as_str()))?;
            let host = info.host_address().with_port(port);
            info = info.with_host_address(host);
        }
    }

    if let Some(value) = headers.get(standard::X_FORWARDED_PREFIX) {
        let prefix = parse::parse_prefix(value.as_str())?;
        info = info.with_forwarded_prefix(ByteStr::copy_from_str(&prefix));
    }

    Ok(info)
}
