//! Print resolved content as JSON.

use std::path::Path;

use anyhow::Result;

use crate::config::load_config;

/// Run the resolve command.
///
/// Unknown keys still resolve (to the homepage, or the primary CTA) with a
/// warning, the same way the site build would.
pub async fn run(config_path: &Path, key: &str, cta: bool) -> Result<()> {
    let resolver = load_config(config_path)?.resolver()?;

    let json = if cta {
        serde_json::to_string_pretty(&resolver.resolve_cta_key(key))?
    } else {
        serde_json::to_string_pretty(&resolver.resolve_page_content(key))?
    };

    println!("{}", json);
    Ok(())
}
