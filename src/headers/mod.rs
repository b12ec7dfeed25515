//! HTTP Headers.
mod name;
mod value;
mod map;

pub mod error;

pub use map::{AsHeaderName, GetAll, HeaderMap, IntoHeaderName, Iter};
pub use name::HeaderName;
pub use value::HeaderValue;

/// Predefined standard header names.
pub mod standard {
    use super::HeaderName;

    macro_rules! standard {
        ($($(#[$doc:meta])* $id:ident = $name:literal;)*) => {
            $(
                $(#[$doc])*
                pub const $id: HeaderName = HeaderName::from_static($name);
            )*
        };
    }

    standard! {
        /// `Host`
        HOST = "host";
        /// `Content-Length`
        CONTENT_LENGTH = "content-length";
        /// `Accept-Encoding`
        ACCEPT_ENCODING = "accept-encoding";
        /// `Content-Encoding`
        CONTENT_ENCODING = "content-encoding";
        /// `Forwarded`, [RFC7239](https://www.rfc-editor.org/rfc/rfc7239)
        FORWARDED = "forwarded";
        /// `X-Forwarded-For`
        X_FORWARDED_FOR = "x-forwarded-for";
        /// `X-Forwarded-Host`
        X_FORWARDED_HOST = "x-forwarded-host";
        /// `X-Forwarded-Port`
        X_FORWARDED_PORT = "x-forwarded-port";
        /// `X-Forwarded-Proto`
        X_FORWARDED_PROTO = "x-forwarded-proto";
        /// `X-Forwarded-Prefix`
        X_FORWARDED_PREFIX = "x-forwarded-prefix";
    }
}
