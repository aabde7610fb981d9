//! Command implementations

mod config;
mod repo;
mod user;

pub use config::config;
pub use repo::{latest_author, latest_commit};
pub use user::user;
