//! Dispatcher port
//!
//! A dispatcher takes an action and produces its decoded result. The base
//! adapter drives the action through a transport; decorators wrap another
//! dispatcher to observe or replace that behavior. Callers only ever see
//! `invoke`, so swapping one for another never changes a call site.

use thiserror::Error;

use super::{Action, DecodeError, Outcome, ResultAction, TransportError};

/// A stub dispatcher was asked for an action nobody registered
///
/// This is a test-setup defect, kept apart from decode and transport errors
/// so it can never be mistaken for a real API answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unhandled action: no stub registered for {action}")]
pub struct UnhandledAction {
    action: String,
}

impl UnhandledAction {
    /// Error for `action`, described by its `Debug` form
    #[must_use]
    pub fn new(action: &impl std::fmt::Debug) -> Self {
        Self {
            action: format!("{action:?}"),
        }
    }

    /// `Debug` form of the unhandled action
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }
}

/// Everything that can go wrong when dispatching an [`Action`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No response was obtained
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response arrived but the action rejected it
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A stub dispatcher had no entry for the action
    #[error(transparent)]
    Unhandled(#[from] UnhandledAction),
}

/// Executes actions end to end, propagating failures as errors
pub trait Dispatcher: Send + Sync {
    /// Dispatch `action` and return its decoded output
    fn invoke<A: Action>(&self, action: &A) -> Result<A::Output, DispatchError>;
}

impl<D: Dispatcher> Dispatcher for &D {
    fn invoke<A: Action>(&self, action: &A) -> Result<A::Output, DispatchError> {
        (**self).invoke(action)
    }
}

impl<D: Dispatcher> Dispatcher for Box<D> {
    fn invoke<A: Action>(&self, action: &A) -> Result<A::Output, DispatchError> {
        (**self).invoke(action)
    }
}

impl<D: Dispatcher> Dispatcher for std::sync::Arc<D> {
    fn invoke<A: Action>(&self, action: &A) -> Result<A::Output, DispatchError> {
        (**self).invoke(action)
    }
}

/// Executes result-flavor actions; every failure comes back as a value
pub trait ResultDispatcher: Send + Sync {
    /// Dispatch `action` and return its outcome
    ///
    /// Transport failures are folded into the outcome; this never returns
    /// through any other channel.
    fn try_invoke<A: ResultAction>(&self, action: &A) -> Outcome<A::Success>;
}

impl<D: ResultDispatcher> ResultDispatcher for &D {
    fn try_invoke<A: ResultAction>(&self, action: &A) -> Outcome<A::Success> {
        (**self).try_invoke(action)
    }
}

impl<D: ResultDispatcher> ResultDispatcher for Box<D> {
    fn try_invoke<A: ResultAction>(&self, action: &A) -> Outcome<A::Success> {
        (**self).try_invoke(action)
    }
}

impl<D: ResultDispatcher> ResultDispatcher for std::sync::Arc<D> {
    fn try_invoke<A: ResultAction>(&self, action: &A) -> Outcome<A::Success> {
        (**self).try_invoke(action)
    }
}
