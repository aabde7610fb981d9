//! Data types shared by actions, dispatchers and transports
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Request`] - What an action wants sent
//! - [`Response`] - What came back
//! - [`Method`] and [`Status`] - HTTP vocabulary
//! - [`AnyAction`] - A type-erased, comparable action value

mod any_action;
mod method;
mod request;
mod response;
mod status;

pub use any_action::AnyAction;
pub use method::Method;
pub use request::Request;
pub use response::Response;
pub use status::Status;
