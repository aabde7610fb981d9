//! GitHub data returned by the actions in this module

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserDetails {
    /// Login name, e.g. `octocat`
    #[serde(rename = "login")]
    pub name: String,
    /// Display name, when the account has set one
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Profile page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Number of public repositories
    #[serde(default)]
    pub public_repos: u32,
    /// Logins of the organizations the account belongs to
    ///
    /// The user endpoint never returns these; they are filled in by
    /// composing with [`GetUserOrgs`](super::GetUserOrgs).
    #[serde(default)]
    pub orgs: Vec<String>,
}

impl UserDetails {
    /// Details carrying only a login name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The newest commit on a repository's default branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit hash
    pub sha: String,
    /// Full commit message
    pub message: String,
    /// Author name as recorded by git
    pub author_name: String,
    /// Login of the GitHub account the commit is linked to
    ///
    /// `None` when the author's email matches no account; the git name is
    /// never a stand-in for a login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_login: Option<String>,
    /// When the commit was authored
    pub authored_at: DateTime<Utc>,
}

// Wire shape of one entry of `GET /repos/{owner}/{repo}/commits`.

#[derive(Debug, Deserialize)]
pub(super) struct CommitEntry {
    sha: String,
    commit: CommitData,
    author: Option<Account>,
}

#[derive(Debug, Deserialize)]
struct CommitData {
    message: String,
    author: Signature,
}

#[derive(Debug, Deserialize)]
struct Signature {
    name: String,
    date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Account {
    pub(super) login: String,
}

impl From<CommitEntry> for Commit {
    fn from(entry: CommitEntry) -> Self {
        Self {
            sha: entry.sha,
            message: entry.commit.message,
            author_name: entry.commit.author.name,
            author_login: entry.author.map(|account| account.login),
            authored_at: entry.commit.author.date,
        }
    }
}
