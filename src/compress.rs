//! On-demand compression gating on the response write path.
//!
//! [`CompressionGate`] sits between the connection driver and an underlying
//! [`CompressionStage`]. The stage needs to have seen the request (its
//! `Accept-Encoding` and method decide whether compression applies), but
//! decoding eagerly on request arrival would be wasted work for cycles that
//! never produce a response. The gate therefore defers the decode until the
//! first response write of a cycle, and resets itself when the terminal
//! content marker goes out so the next pipelined cycle re-triggers it.
use bytes::Bytes;

use crate::{
    body::Body,
    log::{debug, trace},
    request::Request,
    response,
};

/// An opaque error from the underlying compression stage.
pub type StageError = Box<dyn std::error::Error + Send + Sync>;

/// Items travelling down the response write path.
#[derive(Debug)]
pub enum WriteMsg {
    /// Raw, unwrapped body buffer.
    Raw(Bytes),
    /// Header-only response.
    Head(response::Parts),
    /// Response with its complete body, also terminal.
    Full(response::Parts, Bytes),
    /// Body-content frame.
    Content(Bytes),
    /// Terminal content marker.
    Last,
}

impl WriteMsg {
    /// Returns `true` if this message carries a response head.
    #[inline]
    pub const fn is_response(&self) -> bool {
        matches!(self, Self::Head(_) | Self::Full(..))
    }

    /// Returns `true` if this message terminates the response body.
    #[inline]
    pub const fn is_last(&self) -> bool {
        matches!(self, Self::Last | Self::Full(..))
    }
}

/// The underlying compression stage.
///
/// The gate composes over the stage rather than extending it: it owns one and
/// calls these two entry points explicitly.
pub trait CompressionStage {
    /// Forward a write-path message downstream.
    fn write(&mut self, msg: WriteMsg) -> Result<(), StageError>;

    /// Observe an inbound request to configure on-demand compression.
    fn decode(&mut self, request: &Request) -> Result<(), StageError>;
}

/// Per-connection write interceptor enabling on-demand compression.
///
/// One instance per connection, driven only by that connection's worker; the
/// fields are mutated without synchronization. Dropping the gate mid-cycle is
/// the only cancellation there is.
#[derive(Debug)]
pub struct CompressionGate<S> {
    inner: S,
    decoded: bool,
    request: Option<Request>,
}

impl<S> CompressionGate<S> {
    /// Create new [`CompressionGate`] over a stage.
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            decoded: false,
            request: None,
        }
    }

    /// Store the in-flight request for the current cycle.
    ///
    /// Called by the inbound side of the pipeline on request arrival; the
    /// decode itself is deferred until the first response write.
    #[inline]
    pub fn store_request(&mut self, request: Request) {
        self.request = Some(request);
    }

    /// Returns the pending request of the current cycle, if any.
    #[inline]
    pub const fn pending_request(&self) -> Option<&Request> {
        self.request.as_ref()
    }

    /// Returns `true` once the decode step ran for the current cycle.
    #[inline]
    pub const fn is_decoded(&self) -> bool {
        self.decoded
    }

    /// Consume self into the underlying stage.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: CompressionStage> CompressionGate<S> {
    /// Intercept one outbound write.
    ///
    /// A raw buffer is wrapped into a content frame before delegation. The
    /// first response head of a cycle triggers the decode step against the
    /// stored pending request; the terminal content marker afterwards resets
    /// the gate for the next pipelined cycle. The message is finally
    /// delegated to the underlying stage.
    ///
    /// # Errors
    ///
    /// Fatal for the current write; there is no local recovery.
    pub fn write(&mut self, msg: WriteMsg) -> Result<(), CompressError> {
        let msg = match msg {
            WriteMsg::Raw(buf) => {
                return self
                    .inner
                    .write(WriteMsg::Content(buf))
                    .map_err(CompressError::Stage);
            }
            msg => msg,
        };

        if !self.decoded && msg.is_response() {
            // lazy initialization, the pipeline stored the request up front
            let mut request = self.request.take().ok_or(CompressError::MissingRequest)?;
            let result = self.decode(&mut request, false);
            self.request = Some(request);
            result?;
        }

        if self.decoded && self.request.is_some() && msg.is_last() {
            trace!("response cycle complete, resetting compression gate");
            self.decoded = false;
            self.request = None;
        }

        self.inner.write(msg).map_err(CompressError::Stage)
    }

    /// Run the decode step for `request`.
    ///
    /// This is the canonical entry point for the inbound side of the
    /// pipeline, which owns the request buffer and passes `release = true`;
    /// the lazy trigger inside [`write`][CompressionGate::write] passes
    /// `release = false`.
    ///
    /// A complete request whose body buffer is already released, or has zero
    /// readable bytes, is replaced by a header-only view before it reaches
    /// the stage: the inner transport may free such a buffer early (seen when
    /// an HTTP/2 exchange is translated and the response is delayed), and the
    /// stage must never observe the freed contents. With `release` set, a
    /// still-accessible zero-length buffer is released in place.
    ///
    /// # Errors
    ///
    /// Any stage error is fatal for the current write.
    pub fn decode(&mut self, request: &mut Request, release: bool) -> Result<(), CompressError> {
        self.decoded = true;

        let detached = match request.body() {
            Body::Complete(payload) if !payload.is_accessible() || payload.readable() == 0 => {
                debug!("decoding a complete request with an unavailable body buffer");
                let detached = Request::from_parts(request.parts().clone(), Body::Empty);
                if release {
                    if let Body::Complete(payload) = request.body_mut() {
                        if payload.is_accessible() {
                            payload.release();
                        }
                    }
                }
                Some(detached)
            }
            _ => None,
        };

        match &detached {
            Some(replaced) => self.inner.decode(replaced),
            None => self.inner.decode(request),
        }
        .map_err(CompressError::Decode)
    }
}

// ===== Error =====

/// A fatal error on the compression write path.
#[derive(Debug)]
pub enum CompressError {
    /// No pending request was stored before the first response write.
    MissingRequest,
    /// The underlying stage failed to decode the request.
    Decode(StageError),
    /// The underlying stage failed to accept a write.
    Stage(StageError),
}

impl std::error::Error for CompressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingRequest => None,
            Self::Decode(err) | Self::Stage(err) => Some(err.as_ref()),
        }
    }
}

impl std::fmt::Display for CompressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequest => f.write_str("no pending request to decode"),
            Self::Decode(err) => write!(f, "failed to decode request: {err}"),
            Self::Stage(err) => write!(f, "compression stage failure: {err}"),
        }
    }
}
