//! Host and port parsing.
//!
//! Forwarding headers declare hosts that may be unresolvable from this
//! process, so addresses are kept as `(host, port)` pairs instead of socket
//! addresses and no name resolution is attempted.
use crate::ByteStr;

/// A `(host, port)` pair, host possibly an unresolved name.
#[derive(Clone, PartialEq, Eq)]
pub struct HostPort {
    host: ByteStr,
    port: u16,
}

impl HostPort {
    /// Create new [`HostPort`].
    #[inline]
    pub const fn new(host: ByteStr, port: u16) -> Self {
        Self { host, port }
    }

    /// Create new [`HostPort`] from a static host string.
    #[inline]
    pub const fn from_static(host: &'static str, port: u16) -> Self {
        Self {
            host: ByteStr::from_static(host),
            port,
        }
    }

    /// Returns the host, an ip literal or a name.
    #[inline]
    pub fn host(&self) -> &ByteStr {
        &self.host
    }

    /// Returns the port.
    #[inline]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns a new [`HostPort`] with the same host and the given port.
    #[inline]
    pub fn with_port(&self, port: u16) -> Self {
        Self {
            host: self.host.clone(),
            port,
        }
    }
}

// ===== Parsing =====

/// Parse a `host[:port]` string into a [`HostPort`].
///
/// Unresolved names are accepted as-is. IPv6 literals may be bracketed
/// (`[::1]:80`) or bare (`::1`); a bare literal never carries a port.
/// `default_port` applies when the input has no port.
///
/// # Errors
///
/// Returns error for blank input, an unmatched bracket, or a port that is not
/// a decimal number within `u16`.
pub fn parse_address(input: &str, default_port: u16) -> Result<HostPort, AddrError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AddrError::Empty);
    }

    if let Some(rest) = input.strip_prefix('[') {
        let Some((host, tail)) = rest.split_once(']') else {
            return Err(AddrError::UnmatchedBracket);
        };
        if host.is_empty() {
            return Err(AddrError::Empty);
        }
        let port = match tail.strip_prefix(':') {
            Some(port) => parse_port(port)?,
            None if tail.is_empty() => default_port,
            None => return Err(AddrError::UnmatchedBracket),
        };
        return Ok(HostPort::new(ByteStr::copy_from_str(host), port));
    }

    match input.bytes().filter(|b| *b == b':').count() {
        0 => Ok(HostPort::new(ByteStr::copy_from_str(input), default_port)),
        1 => {
            // `split_once` cannot fail, one colon counted above
            let Some((host, port)) = input.split_once(':') else {
                return Err(AddrError::Empty);
            };
            if host.is_empty() {
                return Err(AddrError::Empty);
            }
            Ok(HostPort::new(ByteStr::copy_from_str(host), parse_port(port)?))
        }
        // two or more colons, a bare IPv6 literal
        _ => Ok(HostPort::new(ByteStr::copy_from_str(input), default_port)),
    }
}

fn parse_port(port: &str) -> Result<u16, AddrError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddrError::InvalidPort);
    }
    port.parse().map_err(|_| AddrError::InvalidPort)
}

// ===== Error =====

/// An error that can occur when parsing an address string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddrError {
    /// Host part is empty or blank.
    Empty,
    /// Bracketed IPv6 literal is not terminated properly.
    UnmatchedBracket,
    /// Port part is not a decimal number within `u16`.
    InvalidPort,
}

impl std::error::Error for AddrError {}

impl std::fmt::Display for AddrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("empty host"),
            Self::UnmatchedBracket => f.write_str("unmatched bracket in address"),
            Self::InvalidPort => f.write_str("invalid port in address"),
        }
    }
}

// ===== Formatting =====

impl std::fmt::Display for HostPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.host.contains(':') {
            f.write_str("[")?;
            f.write_str(&self.host)?;
            f.write_str("]")?;
        } else {
            f.write_str(&self.host)?;
        }
        f.write_str(":")?;
        f.write_str(itoa::Buffer::new().format(self.port))
    }
}

impl std::fmt::Debug for HostPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_host_with_port() {
        let addr = parse_address("1.2.3.4:8080", 80).unwrap();
        assert_eq!(addr.host(), &"1.2.3.4");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn parse_host_default_port() {
        let addr = parse_address("example.com", 443).unwrap();
        assert_eq!(addr.host(), &"example.com");
        assert_eq!(addr.port(), 443);
    }

    #[test]
    fn parse_bracketed_ipv6() {
        let addr = parse_address("[::1]:9000", 80).unwrap();
        assert_eq!(addr.host(), &"::1");
        assert_eq!(addr.port(), 9000);

        let addr = parse_address("[2001:db8::1]", 80).unwrap();
        assert_eq!(addr.host(), &"2001:db8::1");
        assert_eq!(addr.port(), 80);
    }

    #[test]
    fn parse_bare_ipv6() {
        let addr = parse_address("::1", 80).unwrap();
        assert_eq!(addr.host(), &"::1");
        assert_eq!(addr.port(), 80);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(parse_address("", 80), Err(AddrError::Empty));
        assert_eq!(parse_address("   ", 80), Err(AddrError::Empty));
        assert_eq!(parse_address("[::1:80", 80), Err(AddrError::UnmatchedBracket));
        assert_eq!(parse_address("host:http", 80), Err(AddrError::InvalidPort));
        assert_eq!(parse_address("host:99999", 80), Err(AddrError::InvalidPort));
    }

    #[test]
    fn display() {
        assert_eq!(parse_address("example.com:80", 80).unwrap().to_string(), "example.com:80");
        assert_eq!(parse_address("[::1]:90", 80).unwrap().to_string(), "[::1]:90");
    }
}
