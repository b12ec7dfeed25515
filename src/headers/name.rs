use crate::bytestr::ByteStr;
use crate::headers::error::HeaderError;

/// HTTP Header name.
///
/// # Case Normalization
///
/// Names are stored in lowercase. [`from_static`][HeaderName::from_static]
/// panics at compile time when the name contains an uppercase character,
/// [`from_slice`][HeaderName::from_slice] normalizes by copying.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HeaderName {
    /// is valid lowercase token
    value: ByteStr,
}

const MAX_HEADER_NAME_LEN: usize = 1 << 8;

impl HeaderName {
    /// Parse header name from a static string.
    ///
    /// The input must not contains ASCII uppercase characters.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name or contains ASCII
    /// uppercase characters.
    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        match validate_header_name_lowercase(name.as_bytes()) {
            Ok(()) => Self {
                value: ByteStr::from_static(name),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header name by copying from slice of bytes.
    ///
    /// Input name is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name.
    pub fn from_slice<A: AsRef<[u8]>>(name: A) -> Result<Self, HeaderError> {
        let mut name = name.as_ref().to_vec();
        name.make_ascii_lowercase();
        match validate_header_name_lowercase(&name) {
            Ok(()) => match ByteStr::from_bytes(name.into()) {
                Ok(value) => Ok(Self { value }),
                // unreachable, validated as ASCII token
                Err(_) => Err(HeaderError::Invalid),
            },
            Err(err) => Err(err),
        }
    }

    /// Returns header name as string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

const fn validate_header_name_lowercase(bytes: &[u8]) -> Result<(), HeaderError> {
    if bytes.is_empty() {
        return Err(HeaderError::Empty);
    }
    if bytes.len() > MAX_HEADER_NAME_LEN {
        return Err(HeaderError::TooLong);
    }
    let mut i = 0;
    while i < bytes.len() {
        if !is_header_name_lowercase(bytes[i]) {
            return Err(HeaderError::Invalid);
        }
        i += 1;
    }
    Ok(())
}

/// RFC9110 token charset, uppercase excluded.
const fn is_header_name_lowercase(byte: u8) -> bool {
    matches!(
        byte,
        b'a'..=b'z' | b'0'..=b'9'
        | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*'
        | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
    )
}

// ===== Formatting =====

impl std::fmt::Debug for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl std::fmt::Display for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
