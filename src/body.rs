//! Request body representations on the inbound side of the pipeline.
use bytes::Bytes;

/// Body buffer of a *complete* request.
///
/// The inner transport may release the buffer before the write path gets to
/// observe it, so every read access goes through the accessibility check.
#[derive(Clone, Default)]
pub struct Payload {
    data: Option<Bytes>,
}

impl Payload {
    /// Create new [`Payload`] from a buffer.
    #[inline]
    pub const fn new(data: Bytes) -> Self {
        Self { data: Some(data) }
    }

    /// Create new already released [`Payload`].
    #[inline]
    pub const fn released() -> Self {
        Self { data: None }
    }

    /// Returns `true` until [`release`][Payload::release] is called.
    #[inline]
    pub const fn is_accessible(&self) -> bool {
        self.data.is_some()
    }

    /// Returns the readable byte count, `0` once released.
    #[inline]
    pub fn readable(&self) -> usize {
        match &self.data {
            Some(data) => data.len(),
            None => 0,
        }
    }

    /// Returns the buffer contents while accessible.
    #[inline]
    pub fn chunk(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// Release the buffer.
    ///
    /// Releasing twice is a no-op.
    #[inline]
    pub fn release(&mut self) {
        self.data = None;
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.data {
            Some(data) => f.debug_struct("Payload").field("readable", &data.len()).finish(),
            None => f.write_str("Payload(released)"),
        }
    }
}

// ===== Body =====

/// How a request body is delivered.
#[derive(Clone, Debug, Default)]
pub enum Body {
    /// Header-only request, no body content.
    #[default]
    Empty,
    /// Header plus entire body delivered as a single unit.
    Complete(Payload),
    /// Body arrives as separate content frames on the pipeline.
    Streamed,
}

impl Body {
    /// Returns `true` if this is a [`Body::Complete`] body.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns reference to the payload of a [`Body::Complete`] body.
    #[inline]
    pub const fn as_payload(&self) -> Option<&Payload> {
        match self {
            Self::Complete(payload) => Some(payload),
            _ => None,
        }
    }
}
