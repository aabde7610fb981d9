//! GitHub actions
//!
//! Each action is a plain value naming one REST call. Paths are relative;
//! the dispatcher's [`BaseConfig`](crate::core::services::BaseConfig)
//! supplies the host and the `Accept` header. Every field placed in a path is
//! percent-encoded as a single segment, so `/`, `?` and `#` in a login or
//! repository name cannot change which endpoint a request reaches.

use crate::core::models::{Request, Response};
use crate::core::ports::{Action, DecodeError, decode_json};

use super::models::{Account, Commit, CommitEntry, UserDetails};

/// `GET /users/{username}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GetUser {
    /// Login to look up
    pub username: String,
}

impl GetUser {
    /// Look up `username`
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl Action for GetUser {
    type Output = UserDetails;

    fn to_request(&self) -> Request {
        Request::get(format!("/users/{}", urlencoding::encode(&self.username)))
    }

    fn from_response(&self, response: &Response) -> Result<UserDetails, DecodeError> {
        decode_json(response)
    }
}

/// `GET /users/{username}/orgs`, decoded to organization logins
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GetUserOrgs {
    /// Login whose public memberships are listed
    pub username: String,
}

impl GetUserOrgs {
    /// List the organizations of `username`
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl Action for GetUserOrgs {
    type Output = Vec<String>;

    fn to_request(&self) -> Request {
        Request::get(format!("/users/{}/orgs", urlencoding::encode(&self.username)))
    }

    fn from_response(&self, response: &Response) -> Result<Vec<String>, DecodeError> {
        let orgs: Vec<Account> = decode_json(response)?;
        Ok(orgs.into_iter().map(|org| org.login).collect())
    }
}

/// `GET /repos/{owner}/{repo}/commits?per_page=1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GetRepoLatestCommit {
    /// Account owning the repository
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl GetRepoLatestCommit {
    /// Newest commit of `owner/repo`
    #[must_use]
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl Action for GetRepoLatestCommit {
    type Output = Commit;

    fn to_request(&self) -> Request {
        let owner = urlencoding::encode(&self.owner);
        let repo = urlencoding::encode(&self.repo);
        Request::get(format!("/repos/{owner}/{repo}/commits")).query("per_page", "1")
    }

    fn from_response(&self, response: &Response) -> Result<Commit, DecodeError> {
        let entries: Vec<CommitEntry> = decode_json(response)?;
        entries
            .into_iter()
            .next()
            .map(Commit::from)
            .ok_or_else(|| DecodeError::body(response, "repository has no commits"))
    }
}
