//! Action port
//!
//! An action is a typed unit of work against a remote API. It knows how to
//! render itself as a [`Request`] and how to decode a [`Response`] into its
//! output. It never performs I/O and holds no mutable state, so decorators
//! may render, log, compare and replay it freely.
//!
//! Two error-handling flavors exist side by side:
//!
//! - [`Action`] decodes into `Result<Output, DecodeError>`; dispatching it
//!   propagates failures to the caller as errors.
//! - [`ResultAction`] decodes into an [`Outcome`], where every failure,
//!   transport failures included, is an explicit [`Failure`] value the caller
//!   branches on. [`Checked`] lifts any `Action` into this flavor.

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::TransportError;
use crate::core::models::{Request, Response, Status};

/// A typed request/decode pair
///
/// The bounds make actions usable as plain values: they can be cloned into a
/// recording log and compared against a stub table.
pub trait Action: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    /// What a successful dispatch produces
    type Output: Clone + Send + Sync + 'static;

    /// Render the request; pure and deterministic
    fn to_request(&self) -> Request;

    /// Decode a response; pure, deterministic and total
    fn from_response(&self, response: &Response) -> Result<Self::Output, DecodeError>;

    /// Move this action into the result flavor
    #[must_use]
    fn checked(self) -> Checked<Self> {
        Checked(self)
    }
}

/// Why a response could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The API answered with a non-2xx status
    #[error("API returned: {status}")]
    Unsuccessful {
        /// Status of the response
        status: Status,
        /// Raw body, kept for diagnostics
        body: String,
    },

    /// The status was fine but the body did not have the expected shape
    #[error("could not decode {status} response: {message}")]
    Body {
        /// Status of the response
        status: Status,
        /// What went wrong while decoding
        message: String,
    },
}

impl DecodeError {
    /// Unsuccessful-status error for `response`
    #[must_use]
    pub fn unsuccessful(response: &Response) -> Self {
        Self::Unsuccessful {
            status: response.status(),
            body: response.body_str().to_string(),
        }
    }

    /// Malformed-body error for `response`
    #[must_use]
    pub fn body(response: &Response, cause: impl fmt::Display) -> Self {
        Self::Body {
            status: response.status(),
            message: cause.to_string(),
        }
    }

    /// Status of the offending response
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Unsuccessful { status, .. } | Self::Body { status, .. } => *status,
        }
    }
}

/// Decode a successful JSON response, rejecting non-2xx statuses
pub fn decode_json<T: DeserializeOwned>(response: &Response) -> Result<T, DecodeError> {
    if !response.is_successful() {
        return Err(DecodeError::unsuccessful(response));
    }
    response.json().map_err(|e| DecodeError::body(response, e))
}

// =============================================================================
// RESULT FLAVOR
// =============================================================================

/// What went wrong, as a value
///
/// Exactly one case is ever populated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The API answered with a non-2xx status
    #[error("{message}")]
    Unsuccessful {
        /// Status of the response
        status: Status,
        /// Human-readable description, e.g. `API returned: 404 Not Found`
        message: String,
    },

    /// A 2xx response whose body could not be decoded
    #[error("{message}")]
    Undecodable {
        /// Status of the response
        status: Status,
        /// What went wrong while decoding
        message: String,
    },

    /// No response was obtained at all
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Failure {
    /// Failure for an unsuccessful `response`
    #[must_use]
    pub fn unsuccessful(response: &Response) -> Self {
        let status = response.status();
        Self::Unsuccessful {
            status,
            message: format!("API returned: {status}"),
        }
    }

    /// Status of the response, when there was one
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        match self {
            Self::Unsuccessful { status, .. } | Self::Undecodable { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl From<DecodeError> for Failure {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Unsuccessful { status, .. } => Self::Unsuccessful {
                status,
                message: format!("API returned: {status}"),
            },
            DecodeError::Body { status, message } => Self::Undecodable { status, message },
        }
    }
}

/// Result of a result-flavor dispatch
pub type Outcome<T> = Result<T, Failure>;

/// A typed request/decode pair whose decoding yields explicit failures
///
/// `from_response` must map every response to either a success or a
/// [`Failure`]; it never panics.
pub trait ResultAction: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Payload of a successful outcome
    type Success: Clone + Send + Sync + 'static;

    /// Render the request; pure and deterministic
    fn to_request(&self) -> Request;

    /// Decode a response into an outcome; pure, deterministic and total
    fn from_response(&self, response: &Response) -> Outcome<Self::Success>;
}

/// Adapter running an [`Action`] under the result flavor
///
/// Decode errors become [`Failure::Unsuccessful`] or
/// [`Failure::Undecodable`]; the request is the wrapped action's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Checked<A>(pub A);

impl<A> Checked<A> {
    /// The wrapped action
    #[must_use]
    pub const fn inner(&self) -> &A {
        &self.0
    }

    /// Unwrap the action
    #[must_use]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A: Action> ResultAction for Checked<A> {
    type Success = A::Output;

    fn to_request(&self) -> Request {
        self.0.to_request()
    }

    fn from_response(&self, response: &Response) -> Outcome<Self::Success> {
        self.0.from_response(response).map_err(Failure::from)
    }
}
