//! GitHub REST API, expressed as actions
//!
//! - [`actions`] - One value type per REST call
//! - [`models`] - What those calls decode into
//! - [`GitHubApi`] - Named operations and multi-call workflows on top of any
//!   [`Dispatcher`]
//!
//! ```
//! use octoconnect::core::services::StubDispatcher;
//! use octoconnect::github::{GetUser, GitHubApi, UserDetails};
//!
//! let github = StubDispatcher::builder()
//!     .on_any::<GetUser>(UserDetails::new("octocat"))
//!     .build();
//!
//! assert_eq!(github.user("anything").unwrap().name, "octocat");
//! ```

pub mod actions;
pub mod models;

pub use actions::{GetRepoLatestCommit, GetUser, GetUserOrgs};
pub use models::{Commit, UserDetails};

use crate::core::models::Status;
use crate::core::ports::{DecodeError, DispatchError, Dispatcher, Transport};
use crate::core::services::{BaseConfig, HttpDispatcher};

/// Public GitHub API host
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Media type pinning the v3 REST representation
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// `User-Agent` sent unless configured otherwise; GitHub rejects requests without one
pub const USER_AGENT: &str = concat!("octoconnect/", env!("CARGO_PKG_VERSION"));

impl BaseConfig {
    /// Decorations for the public GitHub API, unauthenticated
    #[must_use]
    pub fn github() -> Self {
        Self::new(GITHUB_API_URL)
            .header("Accept", GITHUB_ACCEPT)
            .header("User-Agent", USER_AGENT)
    }

    /// Add `Authorization: Bearer <token>`
    #[must_use]
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }
}

/// Dispatcher talking to the public GitHub API over `transport`
#[must_use]
pub fn github_dispatcher<T: Transport>(transport: T, token: Option<&str>) -> HttpDispatcher<T> {
    let base = BaseConfig::github();
    let base = match token {
        Some(token) => base.bearer(token),
        None => base,
    };
    HttpDispatcher::new(transport, base)
}

/// GitHub operations available on every [`Dispatcher`]
///
/// Each operation is a thin call through [`Dispatcher::invoke`]; workflows
/// chain several actions and stay on the caller's side, so stubbing or
/// recording the dispatcher covers them too.
pub trait GitHubApi: Dispatcher {
    /// Account details for `username`
    fn user(&self, username: &str) -> Result<UserDetails, DispatchError> {
        self.invoke(&GetUser::new(username))
    }

    /// Organization logins of `username`
    fn user_orgs(&self, username: &str) -> Result<Vec<String>, DispatchError> {
        self.invoke(&GetUserOrgs::new(username))
    }

    /// Newest commit of `owner/repo`
    fn latest_repo_commit(&self, owner: &str, repo: &str) -> Result<Commit, DispatchError> {
        self.invoke(&GetRepoLatestCommit::new(owner, repo))
    }

    /// Account details of whoever authored the newest commit of `owner/repo`
    ///
    /// A commit not linked to any GitHub account fails with
    /// [`DecodeError::Body`] and no user lookup is dispatched.
    fn latest_commit_author(&self, owner: &str, repo: &str) -> Result<UserDetails, DispatchError> {
        let commit = self.latest_repo_commit(owner, repo)?;
        let Some(login) = commit.author_login else {
            return Err(DecodeError::Body {
                status: Status::OK,
                message: format!("commit {} is not linked to a GitHub account", commit.sha),
            }
            .into());
        };
        self.user(&login)
    }

    /// Account details of `username` with its organizations filled in
    fn user_with_orgs(&self, username: &str) -> Result<UserDetails, DispatchError> {
        let mut user = self.user(username)?;
        user.orgs = self.user_orgs(username)?;
        Ok(user)
    }
}

impl<D: Dispatcher> GitHubApi for D {}
