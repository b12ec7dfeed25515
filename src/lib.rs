//! Proxy-edge mechanisms for an HTTP server pipeline.
//!
//! Two components sit at the edge of the pipeline:
//!
//! - [`forward`], which derives trusted client connection metadata from
//!   reverse-proxy forwarding headers.
//! - [`compress`], a per-connection write interceptor that lazily decodes the
//!   in-flight request to decide whether on-demand compression applies.
#![warn(missing_debug_implementations)]

mod log;

mod bytestr;

pub mod http;
pub mod headers;
pub mod body;
pub mod request;
pub mod response;
pub mod addr;

pub mod forward;
pub mod compress;

pub use bytestr::ByteStr;
