//! Port traits for the dispatch pipeline
//!
//! The pipeline is wired from three seams:
//!
//! - [`Transport`] - Sends one request and returns one response
//! - [`Action`] / [`ResultAction`] - Render a request, decode a response
//! - [`Dispatcher`] / [`ResultDispatcher`] - Run an action end to end
//!
//! Concrete transports live in the `adapters` module; dispatchers and
//! decorators live in `services`.

mod action;
mod dispatcher;
mod transport;

pub use action::{Action, Checked, DecodeError, Failure, Outcome, ResultAction, decode_json};
pub use dispatcher::{DispatchError, Dispatcher, ResultDispatcher, UnhandledAction};
pub use transport::{FnTransport, Transport, TransportError};
