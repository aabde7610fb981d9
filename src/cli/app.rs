//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::debug;

use super::commands;
use octoconnect::adapters::ReqwestTransport;
use octoconnect::config::ClientConfig;
use octoconnect::core::models::AnyAction;
use octoconnect::core::services::{HttpDispatcher, RecordingDispatcher};
use octoconnect::output::OutputMode;

/// Dispatcher used by every networked command
pub type GitHub = RecordingDispatcher<HttpDispatcher<ReqwestTransport>>;

/// octoconnect - Query the GitHub REST API
#[derive(Parser, Debug)]
#[command(
    name = "octoconnect",
    version,
    about = "Query the GitHub REST API",
    long_about = "Query the GitHub REST API through typed actions.\n\n\
                  Settings are read from ~/.octoconnect/config.toml (or --config);\n\
                  GITHUB_TOKEN overrides the configured token."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.octoconnect/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a GitHub account
    User {
        /// Login to look up
        username: String,

        /// Also list the account's organizations
        #[arg(long)]
        orgs: bool,
    },

    /// Show the newest commit of a repository
    LatestCommit {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },

    /// Show the account that authored the newest commit of a repository
    LatestAuthor {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },

    /// Show the effective configuration
    Config {
        /// Write a config file with the defaults if none exists
        #[arg(long)]
        init: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.unwrap_or_else(ClientConfig::default_path);

    match cli.command {
        Some(Command::User { username, orgs }) => {
            with_github(&config_path, |github| commands::user(github, &username, orgs, output_mode))
        },
        Some(Command::LatestCommit { owner, repo }) => {
            with_github(&config_path, |github| commands::latest_commit(github, &owner, &repo, output_mode))
        },
        Some(Command::LatestAuthor { owner, repo }) => {
            with_github(&config_path, |github| commands::latest_author(github, &owner, &repo, output_mode))
        },
        Some(Command::Config { init }) => commands::config(&config_path, init, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": octoconnect::VERSION
                    })
                );
            } else {
                println!("octoconnect v{}", octoconnect::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": octoconnect::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("octoconnect v{}", octoconnect::VERSION);
                println!("\nRun 'octoconnect --help' for usage");
                println!("Run 'octoconnect user octocat' to try it out");
            }
            Ok(())
        },
    }
}

/// Build the dispatcher from config, run `command`, then log what it dispatched
fn with_github<F>(config_path: &Path, command: F) -> anyhow::Result<()>
where
    F: FnOnce(&GitHub) -> anyhow::Result<()>,
{
    let config = ClientConfig::load(Some(config_path))?;
    let transport = ReqwestTransport::new(config.timeout())?;
    let github = RecordingDispatcher::new(HttpDispatcher::new(transport, config.to_base()));

    let result = command(&github);

    let names: Vec<String> = github.recorded().iter().map(AnyAction::name).collect();
    debug!("dispatched {} action(s): {}", names.len(), names.join(", "));
    result
}
