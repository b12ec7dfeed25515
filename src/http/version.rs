/// HTTP Version.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#http.version)
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// `HTTP/1.0`
    pub const HTTP_10: Version = Version(0);

    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version(1);

    /// `HTTP/2.0`
    pub const HTTP_2: Version = Version(2);

    /// `HTTP/3.0`
    pub const HTTP_3: Version = Version(3);

    /// Returns string representation of HTTP version, e.g: `"HTTP/1.1"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            0 => "HTTP/1.0",
            1 => "HTTP/1.1",
            2 => "HTTP/2.0",
            3 => "HTTP/3.0",
            // SAFETY: Version value is privately constructed and immutable
            _ => unsafe { std::hint::unreachable_unchecked() },
        }
    }
}

impl Default for Version {
    #[inline]
    fn default() -> Version {
        Version::HTTP_11
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
