//! Forwarding header validation errors.
use crate::addr::AddrError;

/// An input-validation error over forwarding headers.
///
/// Surfaced synchronously to the caller, which decides whether to reject the
/// request or fall back to the unmodified connection info. Resolution is
/// never retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForwardError {
    /// `X-Forwarded-Port` value is not a decimal port number.
    InvalidPort,
    /// `X-Forwarded-Prefix` value does not start with a slash.
    InvalidPrefix,
    /// A declared host or peer address failed to parse.
    InvalidAddress(AddrError),
}

impl std::error::Error for ForwardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAddress(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ForwardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort => f.write_str("failed to parse a port from x-forwarded-port"),
            Self::InvalidPrefix => {
                f.write_str("x-forwarded-prefix did not start with a slash (\"/\")")
            }
            Self::InvalidAddress(err) => write!(f, "invalid forwarded address: {err}"),
        }
    }
}

impl From<AddrError> for ForwardError {
    #[inline]
    fn from(value: AddrError) -> Self {
        Self::InvalidAddress(value)
    }
}
