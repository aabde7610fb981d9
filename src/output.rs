//! Output formatting for human and JSON modes
//!
//! Every command result can be rendered either as human-readable text or
//! as pretty-printed JSON on stdout.

use colored::Colorize;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::github::{Commit, UserDetails};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a user lookup
#[derive(Debug, Serialize)]
pub struct UserReport {
    /// The account
    #[serde(flatten)]
    pub user: UserDetails,
}

/// Result of a latest-commit lookup
#[derive(Debug, Serialize)]
pub struct CommitReport {
    /// `owner/repo`
    pub repository: String,
    /// The newest commit
    pub commit: Commit,
}

/// Result of a latest-author lookup
#[derive(Debug, Serialize)]
pub struct AuthorReport {
    /// `owner/repo`
    pub repository: String,
    /// Author of the newest commit
    pub author: UserDetails,
}

/// The effective client configuration
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    /// File the config was read from
    pub path: String,
    /// Whether that file exists (defaults are shown otherwise)
    pub exists: bool,
    /// Effective settings, token redacted
    pub config: ClientConfig,
}

fn print_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn print_user(user: &UserDetails) {
    match &user.display_name {
        Some(display) => println!("{} ({display})", user.name.bold()),
        None => println!("{}", user.name.bold()),
    }
    if let Some(url) = &user.html_url {
        println!("  {url}");
    }
    println!("  Public repos: {}", user.public_repos);
    if !user.orgs.is_empty() {
        println!("  Orgs: {}", user.orgs.join(", "));
    }
}

impl UserReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print_user(&self.user),
            OutputMode::Json => print_json(self),
        }
    }
}

impl CommitReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let short = self.commit.sha.get(..7).unwrap_or(&self.commit.sha);
        println!("Latest commit on {}:\n", self.repository.bold());
        println!("  {} {}", short.yellow(), self.commit.message.lines().next().unwrap_or_default());
        let author = match &self.commit.author_login {
            Some(login) => format!("{} ({login})", self.commit.author_name),
            None => self.commit.author_name.clone(),
        };
        println!("  by {author} at {}", self.commit.authored_at.to_rfc3339());
    }
}

impl AuthorReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Latest commit on {} was authored by:\n", self.repository.bold());
                print_user(&self.author);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl ConfigReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let source = if self.exists { "" } else { " (not found, using defaults)" };
        println!("Config: {}{source}\n", self.path.bold());
        println!("  base_url     = {}", self.config.base_url);
        println!("  accept       = {}", self.config.accept);
        println!("  user_agent   = {}", self.config.user_agent);
        println!("  token        = {}", self.config.token.as_deref().unwrap_or("(none)"));
        println!("  timeout_secs = {}", self.config.timeout_secs);
        for (name, value) in &self.config.headers {
            println!("  header       = {name}: {value}");
        }
    }
}
