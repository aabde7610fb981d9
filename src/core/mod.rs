//! Core dispatch machinery for octoconnect
//!
//! Everything here is independent of any concrete API or HTTP library.
//!
//! ## Architecture
//!
//! - `models/` - Plain data (requests, responses, statuses, recorded actions)
//! - `ports/` - The `Transport`, `Action` and `Dispatcher` seams
//! - `services/` - The base dispatcher and its recording and stubbing decorators

pub mod models;
pub mod ports;
pub mod services;
