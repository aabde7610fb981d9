//! Transport port
//!
//! The narrow boundary to whatever actually moves bytes over the network.
//! The core never opens a connection itself; it hands a [`Request`] to a
//! `Transport` and gets a [`Response`] or a [`TransportError`] back.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::core::models::{Request, Response};

/// Failure to obtain any response at all
///
/// An unsuccessful HTTP status is *not* a transport error: the transport
/// did its job and the action decides what the status means.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Could not connect (refused, DNS failure, TLS handshake, reset)
    #[error("connection failed: {0}")]
    Connection(String),

    /// No response within the transport's deadline
    #[error("request timed out")]
    Timeout,

    /// The request could not be turned into a wire request
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Anything else the transport reports
    #[error("transport error: {0}")]
    Other(String),
}

/// Executes requests
///
/// Implementations must be safe to share between threads; each call is
/// independent of any other call on the same instance.
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the response
    fn execute(&self, request: Request) -> Result<Response, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        (**self).execute(request)
    }
}

/// A transport backed by a closure
///
/// Handy for in-process fakes:
///
/// ```
/// use octoconnect::core::models::{Request, Response};
/// use octoconnect::core::ports::{FnTransport, Transport};
///
/// let echo = FnTransport::new(|req: Request| Ok(Response::ok(req.path().to_string())));
/// let resp = echo.execute(Request::get("/ping")).unwrap();
/// assert_eq!(resp.body_str(), "/ping");
/// ```
pub struct FnTransport<F>(F);

impl<F> FnTransport<F>
where
    F: Fn(Request) -> Result<Response, TransportError> + Send + Sync,
{
    /// Wrap a closure
    #[must_use]
    pub const fn new(handler: F) -> Self {
        Self(handler)
    }
}

impl<F> Transport for FnTransport<F>
where
    F: Fn(Request) -> Result<Response, TransportError> + Send + Sync,
{
    fn execute(&self, request: Request) -> Result<Response, TransportError> {
        (self.0)(request)
    }
}

impl<F> fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnTransport")
    }
}
