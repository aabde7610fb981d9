//! Repository commands - newest commit and its author

use octoconnect::github::GitHubApi;
use octoconnect::output::{AuthorReport, CommitReport, OutputMode};

/// Show the newest commit of `owner/repo`
pub fn latest_commit(github: &impl GitHubApi, owner: &str, repo: &str, mode: OutputMode) -> anyhow::Result<()> {
    let commit = github.latest_repo_commit(owner, repo)?;

    CommitReport {
        repository: format!("{owner}/{repo}"),
        commit,
    }
    .render(mode);
    Ok(())
}

/// Show the account behind the newest commit of `owner/repo`
pub fn latest_author(github: &impl GitHubApi, owner: &str, repo: &str, mode: OutputMode) -> anyhow::Result<()> {
    let author = github.latest_commit_author(owner, repo)?;

    AuthorReport {
        repository: format!("{owner}/{repo}"),
        author,
    }
    .render(mode);
    Ok(())
}
