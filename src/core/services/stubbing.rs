//! Stubbing dispatcher
//!
//! A test double answering from a fixed table of canned results. It never
//! renders a request, never decodes and never reaches a transport. Asking for
//! an action that has no entry is a setup defect and fails loudly with
//! [`UnhandledAction`].
//!
//! Entries are registered through a typed builder: the result passed to
//! [`StubDispatcherBuilder::on`] must be the action's own output type, so a
//! lookup can only ever hand back a value of the type the caller expects.
//!
//! ```
//! use octoconnect::core::ports::Dispatcher;
//! use octoconnect::core::services::StubDispatcher;
//! use octoconnect::github::{GetUser, UserDetails};
//!
//! let github = StubDispatcher::builder()
//!     .on(GetUser::new("octocat"), UserDetails::new("octocat"))
//!     .build();
//!
//! assert_eq!(github.invoke(&GetUser::new("octocat")).unwrap().name, "octocat");
//! assert!(github.invoke(&GetUser::new("someone-else")).is_err());
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::core::models::AnyAction;
use crate::core::ports::{
    Action, DispatchError, Dispatcher, Outcome, ResultAction, ResultDispatcher, UnhandledAction,
};

#[derive(Debug)]
enum Matcher {
    /// One specific action value
    Exact(AnyAction),
    /// Every action of one type
    AnyOf(TypeId),
}

struct StubEntry {
    matcher: Matcher,
    result: Arc<dyn Any + Send + Sync>,
}

impl fmt::Debug for StubEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubEntry").field("matcher", &self.matcher).finish_non_exhaustive()
    }
}

/// Dispatcher answering from a fixed stub table
#[derive(Debug, Default)]
pub struct StubDispatcher {
    entries: Vec<StubEntry>,
}

impl StubDispatcher {
    /// Start building a stub table
    #[must_use]
    pub fn builder() -> StubDispatcherBuilder {
        StubDispatcherBuilder::default()
    }

    /// Number of registered entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (every action is unhandled)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the canned result for `action`
    ///
    /// Exact entries are tried before whole-type entries; within each group
    /// the first registered wins. An entry whose stored result is not an `R`
    /// (registered under the other flavor) is skipped.
    fn lookup<A, R>(&self, action: &A) -> Option<R>
    where
        A: PartialEq + 'static,
        R: Clone + 'static,
    {
        let exact = self
            .entries
            .iter()
            .filter(|entry| matches!(&entry.matcher, Matcher::Exact(stubbed) if stubbed.matches(action)));
        let whole_type = self.entries.iter().filter(|entry| {
            matches!(&entry.matcher, Matcher::AnyOf(action_type) if *action_type == TypeId::of::<A>())
        });
        exact.chain(whole_type).find_map(|entry| entry.result.downcast_ref::<R>().cloned())
    }
}

impl Dispatcher for StubDispatcher {
    fn invoke<A: Action>(&self, action: &A) -> Result<A::Output, DispatchError> {
        self.lookup::<A, A::Output>(action).ok_or_else(|| {
            debug!("no stub registered for {action:?}");
            UnhandledAction::new(action).into()
        })
    }
}

/// # Panics
///
/// Panics with the [`UnhandledAction`] message when `action` has no entry.
/// [`Failure`](crate::core::ports::Failure) only carries runtime conditions,
/// and a missing stub is a test-setup defect.
impl ResultDispatcher for StubDispatcher {
    fn try_invoke<A: ResultAction>(&self, action: &A) -> Outcome<A::Success> {
        match self.lookup::<A, Outcome<A::Success>>(action) {
            Some(outcome) => outcome,
            None => panic!("{}", UnhandledAction::new(action)),
        }
    }
}

/// Builder for a [`StubDispatcher`]
#[derive(Debug, Default)]
pub struct StubDispatcherBuilder {
    entries: Vec<StubEntry>,
}

impl StubDispatcherBuilder {
    /// Answer `action` with `output`
    #[must_use]
    pub fn on<A: Action>(self, action: A, output: A::Output) -> Self {
        self.push(Matcher::Exact(AnyAction::new(action)), output)
    }

    /// Answer every action of type `A` with `output`
    #[must_use]
    pub fn on_any<A: Action>(self, output: A::Output) -> Self {
        self.push(Matcher::AnyOf(TypeId::of::<A>()), output)
    }

    /// Answer the result-flavor `action` with `outcome`
    #[must_use]
    pub fn on_outcome<A: ResultAction>(self, action: A, outcome: Outcome<A::Success>) -> Self {
        self.push(Matcher::Exact(AnyAction::new(action)), outcome)
    }

    /// Answer every result-flavor action of type `A` with `outcome`
    #[must_use]
    pub fn on_any_outcome<A: ResultAction>(self, outcome: Outcome<A::Success>) -> Self {
        self.push(Matcher::AnyOf(TypeId::of::<A>()), outcome)
    }

    /// Freeze the table
    #[must_use]
    pub fn build(self) -> StubDispatcher {
        StubDispatcher {
            entries: self.entries,
        }
    }

    fn push<R: Send + Sync + 'static>(mut self, matcher: Matcher, result: R) -> Self {
        self.entries.push(StubEntry {
            matcher,
            result: Arc::new(result),
        });
        self
    }
}
