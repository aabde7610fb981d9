//! Transport implementations
//!
//! - `http` - Blocking HTTP over `reqwest` (feature `http`)
//!
//! In-process fakes need no adapter: see
//! [`FnTransport`](crate::core::ports::FnTransport).

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::ReqwestTransport;
