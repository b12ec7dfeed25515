use std::{ops::Deref, str::Utf8Error};

use bytes::Bytes;

/// str based on [`Bytes`].
///
/// Cloning is cheap, the underlying buffer is shared.
#[derive(Clone, Default)]
pub struct ByteStr(Bytes);

impl ByteStr {
    /// Create new empty [`ByteStr`].
    #[inline]
    pub const fn new() -> Self {
        Self(Bytes::new())
    }

    /// Create [`ByteStr`] from a static string.
    #[inline]
    pub const fn from_static(string: &'static str) -> Self {
        Self(Bytes::from_static(string.as_bytes()))
    }

    /// Create [`ByteStr`] from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the bytes is not valid UTF-8.
    pub fn from_bytes(bytes: Bytes) -> Result<ByteStr, Utf8Error> {
        std::str::from_utf8(bytes.as_ref())?;
        Ok(Self(bytes))
    }

    /// Create [`ByteStr`] by copying a string slice.
    #[inline]
    pub fn copy_from_str(string: &str) -> Self {
        Self(Bytes::copy_from_slice(string.as_bytes()))
    }

    /// Returns self as string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: checked at construction and immutable
        unsafe { std::str::from_utf8_unchecked(self.0.as_ref()) }
    }

    /// Consume self into the underlying [`Bytes`].
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Deref for ByteStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl From<&'static str> for ByteStr {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

// ===== Comparison =====

impl Eq for ByteStr {}

impl PartialEq for ByteStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<str> for ByteStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == other.as_bytes()
    }
}

impl std::hash::Hash for ByteStr {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

// ===== Formatting =====

impl std::fmt::Display for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self)
    }
}

impl std::fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}
