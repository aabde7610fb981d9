//! Type-erased action snapshots
//!
//! Decorators deal with actions of many different types at once: the
//! recording log holds every action it saw, the stub table holds every
//! action it can answer. `AnyAction` erases the concrete type while keeping
//! structural equality and the ability to get the concrete value back.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

trait Erased: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_erased(&self, other: &dyn Erased) -> bool;
    fn type_name(&self) -> &'static str;
}

impl<T> Erased for T
where
    T: fmt::Debug + PartialEq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_erased(&self, other: &dyn Erased) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|other| other == self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// An action of any type, compared structurally
///
/// Two `AnyAction`s are equal when they wrap values of the same concrete
/// type that are equal under that type's `PartialEq`. Cloning is cheap.
#[derive(Clone)]
pub struct AnyAction(Arc<dyn Erased>);

impl AnyAction {
    /// Wrap an action value
    #[must_use]
    pub fn new<T>(action: T) -> Self
    where
        T: fmt::Debug + PartialEq + Send + Sync + 'static,
    {
        Self(Arc::new(action))
    }

    /// Wrap a copy of a borrowed action
    #[must_use]
    pub fn of<T>(action: &T) -> Self
    where
        T: fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
    {
        Self::new(action.clone())
    }

    /// The wrapped action, if it is a `T`
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// Whether the wrapped action is a `T`
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }

    /// Whether the wrapped action is a `T` equal to `action`
    #[must_use]
    pub fn matches<T>(&self, action: &T) -> bool
    where
        T: PartialEq + 'static,
    {
        self.downcast_ref::<T>().is_some_and(|own| own == action)
    }

    /// `TypeId` of the wrapped action
    #[must_use]
    pub fn action_type(&self) -> TypeId {
        (*self.0).as_any().type_id()
    }

    /// Short type name of the wrapped action, without module paths
    #[must_use]
    pub fn name(&self) -> String {
        short_type_name((*self.0).type_name())
    }
}

impl PartialEq for AnyAction {
    fn eq(&self, other: &Self) -> bool {
        (*self.0).eq_erased(&*other.0)
    }
}

impl fmt::Debug for AnyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Strip module paths from every segment of a type name
///
/// `octoconnect::Checked<octoconnect::github::GetUser>` becomes
/// `Checked<GetUser>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or_default());
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or_default());
    out
}
