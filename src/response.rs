//! HTTP Response.
use crate::{
    headers::HeaderMap,
    http::{StatusCode, Version},
};

/// HTTP Response Parts.
#[derive(Debug, Clone, Default)]
pub struct Parts {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
}

impl Parts {
    /// Create [`Parts`] with the given status.
    #[inline]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            ..<_>::default()
        }
    }
}
