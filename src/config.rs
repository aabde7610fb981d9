//! Client configuration
//!
//! Where to send requests and how to decorate them. Stored as TOML at
//! `~/.octoconnect/config.toml` unless a path is given explicitly; every key
//! is optional and a missing file means all defaults.
//!
//! ```toml
//! base_url = "https://github.example.com/api/v3"
//! token = "ghp_..."
//! timeout_secs = 10
//!
//! [headers]
//! X-GitHub-Api-Version = "2022-11-28"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::services::BaseConfig;
use crate::github::{GITHUB_ACCEPT, GITHUB_API_URL, USER_AGENT};
use crate::paths;

/// Environment variable overriding the configured token
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Shown in place of a configured token
const REDACTED: &str = "<redacted>";

/// Connection settings for the GitHub API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, without a trailing `/`
    pub base_url: String,
    /// `Accept` header sent with every request
    pub accept: String,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
    /// Bearer token; anonymous when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Extra baseline headers
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_URL.to_string(),
            accept: GITHUB_ACCEPT.to_string(),
            user_agent: USER_AGENT.to_string(),
            token: None,
            timeout_secs: 30,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    /// Load from `path`, or the default location, then apply the environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, |name| std::env::var(name).ok())
    }

    /// Like [`load`](Self::load), reading variables through `env`
    pub fn load_with_env(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let path = path.map_or_else(paths::config_file, Path::to_path_buf);
        let mut config = Self::from_file(&path)?;
        if let Some(token) = env(TOKEN_VAR).filter(|token| !token.trim().is_empty()) {
            debug!("using token from {TOKEN_VAR}");
            config.token = Some(token);
        }
        Ok(config)
    }

    /// Read a config file; a missing file yields the defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Write this config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("failed to write config {}", path.display()))
    }

    /// Default config location
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_file()
    }

    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Baseline request decorations described by this config
    ///
    /// Extra headers are applied last and may replace `Accept` or
    /// `User-Agent`.
    #[must_use]
    pub fn to_base(&self) -> BaseConfig {
        let base = BaseConfig::new(&self.base_url)
            .header("Accept", &self.accept)
            .header("User-Agent", &self.user_agent);
        let base = match &self.token {
            Some(token) => base.bearer(token),
            None => base,
        };
        self.headers
            .iter()
            .fold(base, |base, (name, value)| base.header(name, value))
    }

    /// Copy safe to print: the token, if any, is masked
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            token: self.token.as_ref().map(|_| REDACTED.to_string()),
            ..self.clone()
        }
    }
}
