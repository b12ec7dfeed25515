//! HTTP Request.
use crate::{
    ByteStr,
    body::Body,
    headers::HeaderMap,
    http::{Method, Version},
};

/// HTTP Request Parts.
#[derive(Debug, Clone, Default)]
pub struct Parts {
    pub method: Method,
    pub uri: ByteStr,
    pub version: Version,
    pub headers: HeaderMap,
}

/// HTTP Request.
#[derive(Debug, Clone, Default)]
pub struct Request {
    parts: Parts,
    body: Body,
}

/// Constructor
impl Request {
    /// Create [`Request`] from [`Parts`] and [`Body`].
    #[inline]
    pub fn from_parts(parts: Parts, body: Body) -> Self {
        Self { parts, body }
    }
}

impl Request {
    /// Returns shared reference to [`Parts`].
    #[inline]
    pub fn parts(&self) -> &Parts {
        &self.parts
    }

    /// Returns mutable reference to [`Parts`].
    #[inline]
    pub fn parts_mut(&mut self) -> &mut Parts {
        &mut self.parts
    }

    /// Returns shared reference to [`Method`].
    #[inline]
    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    /// Returns the request target.
    #[inline]
    pub fn uri(&self) -> &ByteStr {
        &self.parts.uri
    }

    /// Returns shared reference to [`Version`].
    #[inline]
    pub fn version(&self) -> &Version {
        &self.parts.version
    }

    /// Returns shared reference to [`HeaderMap`].
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Returns mutable reference to [`HeaderMap`].
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.parts.headers
    }

    /// Returns shared reference to [`Body`].
    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns mutable reference to [`Body`].
    #[inline]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Consume self into [`Parts`] and [`Body`].
    #[inline]
    pub fn into_parts(self) -> (Parts, Body) {
        (self.parts, self.body)
    }
}
