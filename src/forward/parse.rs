//! Forwarding header grammars.
//!
//! Four rules are pinned here so malformed input behaves deterministically:
//!
//! | rule | pattern |
//! |---|---|
//! | `Forwarded` `host` param | `host="?([^;,"]+)"?` |
//! | `Forwarded` `proto` param | `proto="?([a-zA-Z][a-zA-Z0-9+.-]*)"?` |
//! | `Forwarded` `for` param | `for="?([^;,"]+)"?` |
//! | `X-Forwarded-Proto` value | `^[a-zA-Z][a-zA-Z0-9+.-]*$` |
use crate::forward::error::ForwardError;

/// Returns the first comma-separated element, trimmed.
///
/// Forwarding headers declare the nearest hop first; later elements are
/// earlier hops and are ignored.
pub(crate) fn first_element(value: &str) -> &str {
    match value.split_once(',') {
        Some((first, _)) => first.trim(),
        None => value.trim(),
    }
}

/// Find-anywhere search for a `key="?([^;,"]+)"?` parameter.
///
/// At each occurrence of `key`, one quote is skipped if present and the
/// longest run of bytes outside `;,"` is captured. An empty capture does not
/// match and the search continues, mirroring a regex engine advancing its
/// start position. The first capture wins, trimmed.
pub(crate) fn find_param<'a>(segment: &'a str, key: &str) -> Option<&'a str> {
    let mut offset = 0;
    while let Some(at) = segment[offset..].find(key) {
        let start = offset + at + key.len();
        let rest = segment[start..].strip_prefix('"').unwrap_or(&segment[start..]);
        let end = rest
            .find(|c| matches!(c, ';' | ',' | '"'))
            .unwrap_or(rest.len());
        if end > 0 {
            let value = rest[..end].trim();
            if !value.is_empty() {
                return Some(value);
            }
        }
        offset += at + 1;
    }
    None
}

/// Find-anywhere search for a `proto="?([a-zA-Z][a-zA-Z0-9+.-]*)"?` parameter.
pub(crate) fn find_proto_param(segment: &str) -> Option<&str> {
    const KEY: &str = "proto=";

    let mut offset = 0;
    while let Some(at) = segment[offset..].find(KEY) {
        let start = offset + at + KEY.len();
        let rest = segment[start..].strip_prefix('"').unwrap_or(&segment[start..]);
        let end = scheme_len(rest);
        if end > 0 {
            return Some(&rest[..end]);
        }
        offset += at + 1;
    }
    None
}

/// Returns `true` if the whole value matches the scheme grammar
/// `letter (letter|digit|'+'|'-'|'.')*`.
pub(crate) fn is_scheme(value: &str) -> bool {
    !value.is_empty() && scheme_len(value) == value.len()
}

/// Length of the longest prefix matching the scheme grammar, `0` if the
/// first character is not a letter.
fn scheme_len(value: &str) -> usize {
    let bytes = value.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => bytes[1..]
            .iter()
            .position(|&b| !matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'+' | b'.' | b'-'))
            .map_or(bytes.len(), |at| at + 1),
        _ => 0,
    }
}

/// Parse an `X-Forwarded-Port` element into a port number.
///
/// The value must be one or more decimal digits fitting a port.
pub(crate) fn parse_port(value: &str) -> Result<u16, ForwardError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ForwardError::InvalidPort);
    }
    value.parse().map_err(|_| ForwardError::InvalidPort)
}

/// Assemble an `X-Forwarded-Prefix` value into a path prefix.
///
/// The value is tokenized on commas, tokens trimmed and empty ones dropped.
/// Trailing slashes of each token are stripped down to a minimum length of 1,
/// then the tokens are concatenated with no separator.
///
/// # Errors
///
/// Returns error when the assembled prefix is non-empty and does not start
/// with a slash.
pub(crate) fn parse_prefix(value: &str) -> Result<String, ForwardError> {
    let mut prefix = String::with_capacity(value.len());
    for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let mut end = token.len();
        while end > 1 && token.as_bytes()[end - 1] == b'/' {
            end -= 1;
        }
        prefix.push_str(&token[..end]);
    }
    if !prefix.is_empty() && !prefix.starts_with('/') {
        return Err(ForwardError::InvalidPrefix);
    }
    Ok(prefix)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn first_element_nearest_hop() {
        assert_eq!(first_element("1.2.3.4, 5.6.6.6"), "1.2.3.4");
        assert_eq!(first_element(" https "), "https");
        assert_eq!(first_element("single"), "single");
    }

    #[test]
    fn param_search() {
        let segment = "proto=https;host=example.com:8443;for=9.9.9.9";
        assert_eq!(find_param(segment, "host="), Some("example.com:8443"));
        assert_eq!(find_param(segment, "for="), Some("9.9.9.9"));
        assert_eq!(find_proto_param(segment), Some("https"));
    }

    #[test]
    fn param_search_quoted() {
        let segment = r#"for="[2001:db8::1]:4711";proto="https";host="example.com""#;
        assert_eq!(find_param(segment, "for="), Some("[2001:db8::1]:4711"));
        assert_eq!(find_param(segment, "host="), Some("example.com"));
        assert_eq!(find_proto_param(segment), Some("https"));
    }

    #[test]
    fn param_search_absent_or_empty() {
        assert_eq!(find_param("proto=https", "host="), None);
        // empty capture does not match
        assert_eq!(find_param(r#"host="";proto=https"#, "host="), None);
        assert_eq!(find_proto_param("proto=;host=a"), None);
        // value not starting with a letter does not match
        assert_eq!(find_proto_param("proto=1https"), None);
    }

    #[test]
    fn scheme_grammar() {
        assert!(is_scheme("https"));
        assert!(is_scheme("svn+ssh"));
        assert!(is_scheme("x-7."));
        assert!(!is_scheme(""));
        assert!(!is_scheme("1http"));
        assert!(!is_scheme("ht tp"));
        assert!(!is_scheme("https,"));
    }

    #[test]
    fn port_rule() {
        assert_eq!(parse_port("8080"), Ok(8080));
        assert_eq!(parse_port("abc"), Err(ForwardError::InvalidPort));
        assert_eq!(parse_port("80a"), Err(ForwardError::InvalidPort));
        assert_eq!(parse_port(""), Err(ForwardError::InvalidPort));
        assert_eq!(parse_port("-1"), Err(ForwardError::InvalidPort));
        assert_eq!(parse_port("70000"), Err(ForwardError::InvalidPort));
    }

    #[test]
    fn prefix_rule() {
        assert_eq!(parse_prefix("/a//, /b/").as_deref(), Ok("/a/b"));
        assert_eq!(parse_prefix("/").as_deref(), Ok("/"));
        assert_eq!(parse_prefix("//").as_deref(), Ok("/"));
        assert_eq!(parse_prefix("").as_deref(), Ok(""));
        assert_eq!(parse_prefix(" , ").as_deref(), Ok(""));
        assert_eq!(parse_prefix("b"), Err(ForwardError::InvalidPrefix));
        assert_eq!(parse_prefix("a/, /b"), Err(ForwardError::InvalidPrefix));
    }
}
