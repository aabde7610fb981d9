//! octoconnect - Query the GitHub REST API from the command line
//!
//! A thin front end over the octoconnect library: each subcommand dispatches
//! one or more GitHub actions and renders the result.

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

mod cli;

/// Main entry point for the octoconnect CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
