//! Recording decorator
//!
//! Wraps another dispatcher and keeps an append-only log of every action it
//! was asked to dispatch, in call order, duplicates and failures included.
//! The inner result is returned untouched.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::trace;

use crate::core::models::AnyAction;
use crate::core::ports::{
    Action, DispatchError, Dispatcher, Outcome, ResultAction, ResultDispatcher,
};

/// Dispatcher that records actions before delegating
///
/// The inner dispatcher is held by value; pass `&inner` or an `Arc` to keep
/// ownership elsewhere.
#[derive(Debug)]
pub struct RecordingDispatcher<D> {
    inner: D,
    log: Mutex<Vec<AnyAction>>,
}

impl<D> RecordingDispatcher<D> {
    /// Start recording in front of `inner`
    #[must_use]
    pub const fn new(inner: D) -> Self {
        Self {
            inner,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the log, oldest first
    #[must_use]
    pub fn recorded(&self) -> Vec<AnyAction> {
        self.entries().clone()
    }

    /// Recorded actions of type `A`, oldest first
    #[must_use]
    pub fn recorded_of<A: Action>(&self) -> Vec<A> {
        self.entries()
            .iter()
            .filter_map(|entry| entry.downcast_ref::<A>().cloned())
            .collect()
    }

    /// Number of recorded actions
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// The wrapped dispatcher
    #[must_use]
    pub const fn inner(&self) -> &D {
        &self.inner
    }

    fn append(&self, entry: AnyAction) {
        trace!("recording {entry:?}");
        self.entries().push(entry);
    }

    // Entries are only ever pushed whole, so a poisoned log is still valid.
    fn entries(&self) -> MutexGuard<'_, Vec<AnyAction>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: Dispatcher> Dispatcher for RecordingDispatcher<D> {
    fn invoke<A: Action>(&self, action: &A) -> Result<A::Output, DispatchError> {
        self.append(AnyAction::of(action));
        self.inner.invoke(action)
    }
}

impl<D: ResultDispatcher> ResultDispatcher for RecordingDispatcher<D> {
    fn try_invoke<A: ResultAction>(&self, action: &A) -> Outcome<A::Success> {
        self.append(AnyAction::of(action));
        self.inner.try_invoke(action)
    }
}
