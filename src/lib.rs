//! octoconnect - Action-based REST API client
//!
//! Every remote call is a typed value (an *action*) that knows how to render
//! its request and decode its response. A *dispatcher* runs actions through a
//! pluggable transport. Decorators record what was dispatched or answer from
//! canned results, so code written against a dispatcher is testable without
//! a network.
//!
//! - [`core`] - Actions, transports, dispatchers and decorators
//! - [`github`] - GitHub REST API actions and workflows
//! - [`adapters`] - Real transports
//! - [`config`] - Client configuration file

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod github;
pub mod output;
pub mod paths;
