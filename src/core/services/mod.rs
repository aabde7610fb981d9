//! Dispatchers
//!
//! - [`dispatch`] - The base dispatcher driving actions through a transport
//! - [`recording`] - Decorator logging every dispatched action
//! - [`stubbing`] - Test double answering from canned results

pub mod dispatch;
pub mod recording;
pub mod stubbing;

pub use dispatch::{BaseConfig, HttpDispatcher};
pub use recording::RecordingDispatcher;
pub use stubbing::{StubDispatcher, StubDispatcherBuilder};
