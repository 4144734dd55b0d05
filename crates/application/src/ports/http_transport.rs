//! HTTP transport port
//!
//! Providers never open connections themselves. The host injects a transport
//! once and every provider request goes through it.

use std::future::Future;
use std::pin::Pin;

use octoauth_domain::{TransportRequest, TransportResponse};

/// Errors a transport can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// No connection could be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;

/// Port for sending HTTP requests.
///
/// Implementations must be shareable across threads; the same handle is
/// cloned into every provider a plugin builds.
pub trait HttpTransport: Send + Sync {
    /// Sends a request and returns the full response.
    ///
    /// Non-2xx statuses are responses, not errors.
    fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}
