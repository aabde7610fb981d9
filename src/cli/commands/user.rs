//! User command - look up a GitHub account

use octoconnect::github::GitHubApi;
use octoconnect::output::{OutputMode, UserReport};

/// Show `username`, with organizations when `orgs` is set
pub fn user(github: &impl GitHubApi, username: &str, orgs: bool, mode: OutputMode) -> anyhow::Result<()> {
    let user = if orgs {
        github.user_with_orgs(username)?
    } else {
        github.user(username)?
    };

    UserReport { user }.render(mode);
    Ok(())
}
