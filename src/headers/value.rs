use bytes::Bytes;

use crate::headers::error::HeaderError;

/// HTTP Header Value.
///
/// This API does not support non-ASCII value.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderValue {
    /// is ASCII
    bytes: Bytes,
}

impl HeaderValue {
    /// Parse header value from static bytes.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header value.
    #[inline]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        match validate_header_value(bytes) {
            Ok(()) => Self {
                bytes: Bytes::from_static(bytes),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header value from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_bytes<B: Into<Bytes>>(value: B) -> Result<Self, HeaderError> {
        let bytes = value.into();
        match validate_header_value(bytes.as_ref()) {
            Ok(()) => Ok(Self { bytes }),
            Err(err) => Err(err),
        }
    }

    /// Parse [`HeaderValue`] from string.
    ///
    /// # Panics
    ///
    /// This function will panic if the value contains invalid character.
    #[inline]
    pub fn from_string(value: &str) -> HeaderValue {
        match Self::from_bytes(Bytes::copy_from_slice(value.as_bytes())) {
            Ok(value) => value,
            Err(err) => err.panic_const(),
        }
    }

    /// Returns header value as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// Returns header value as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `bytes` is valid ASCII
        unsafe { std::str::from_utf8_unchecked(self.bytes.as_ref()) }
    }
}

// ===== Parsing =====

const MAX_HEADER_VALUE_LEN: usize = 1 << 13; // 8KB

const fn validate_header_value(mut bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;
    match bytes {
        // no leading SP / HTAB
        | [b' ' | b'\t', ..]
        // no trailing SP / HTAB
        | [.., b' ' | b'\t'] => {
            return Err(E::Invalid);
        }
        _ => {}
    }
    if bytes.len() > MAX_HEADER_VALUE_LEN {
        return Err(E::TooLong);
    }
    let mut error = false;
    while let [byte, rest @ ..] = bytes {
        error |= !is_header_value(*byte);
        bytes = rest;
    }
    if !error { Ok(()) } else { Err(E::Invalid) }
}

/// Visible ASCII, SP and HTAB.
const fn is_header_value(byte: u8) -> bool {
    matches!(byte, b'\t' | b' '..=b'~')
}

// ===== Formatting =====

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
