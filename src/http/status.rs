use std::num::NonZeroU16;

/// HTTP [Status Code][rfc].
///
/// Only the codes the server emits are predefined; arbitrary codes are not
/// supported.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

macro_rules! status_codes {
    ($($int:literal $id:ident $msg:literal;)*) => {
        impl StatusCode {
            $(
                #[doc = concat!("`", stringify!($int), " ", $msg, "`")]
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*

            /// Returns status code value, e.g: `200`.
            #[inline]
            pub const fn status(&self) -> u16 {
                self.0.get()
            }

            /// Returns status code and message as string slice, e.g: `"200 OK"`.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self.0.get() {
                    $($int => concat!(stringify!($int), " ", $msg),)*
                    // SAFETY: StatusCode value is privately constructed and immutable
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }
        }
    };
}

status_codes! {
    100 CONTINUE "Continue";
    200 OK "OK";
    204 NO_CONTENT "No Content";
    301 MOVED_PERMANENTLY "Moved Permanently";
    302 FOUND "Found";
    304 NOT_MODIFIED "Not Modified";
    400 BAD_REQUEST "Bad Request";
    404 NOT_FOUND "Not Found";
    413 CONTENT_TOO_LARGE "Content Too Large";
    500 INTERNAL_SERVER_ERROR "Internal Server Error";
    502 BAD_GATEWAY "Bad Gateway";
    503 SERVICE_UNAVAILABLE "Service Unavailable";
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
