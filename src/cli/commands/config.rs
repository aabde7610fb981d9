//! Config command - show (and optionally create) the client configuration

use std::path::Path;

use octoconnect::config::ClientConfig;
use octoconnect::output::{ConfigReport, OutputMode};

/// Print the effective configuration read from `path`
pub fn config(path: &Path, init: bool, mode: OutputMode) -> anyhow::Result<()> {
    if init && !path.exists() {
        ClientConfig::default().save(path)?;
        if mode == OutputMode::Human {
            println!("Wrote default config to {}\n", path.display());
        }
    }

    let config = ClientConfig::load(Some(path))?;

    ConfigReport {
        path: path.display().to_string(),
        exists: path.exists(),
        config: config.redacted(),
    }
    .render(mode);
    Ok(())
}
