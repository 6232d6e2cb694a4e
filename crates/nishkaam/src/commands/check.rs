//! Content validation command.

use std::path::Path;

use anyhow::{bail, Result};

use crate::config::load_config;

/// Run the check command. Fails when the content has any issue.
pub async fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let content = config.load_content()?;

    let issues = content.validate();
    if issues.is_empty() {
        tracing::info!(
            "Content OK: {} heroes, {} CTAs, {} offerings",
            content.heroes.len(),
            content.ctas.len(),
            content.offerings.len()
        );
        return Ok(());
    }

    for issue in &issues {
        tracing::warn!("{}", issue);
    }
    bail!("Found {} content issue(s)", issues.len());
}
