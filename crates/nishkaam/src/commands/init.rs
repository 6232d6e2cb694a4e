//! Scaffold a site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");
    scaffold(Path::new("."), yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'nishkaam build' to generate the site.");

    Ok(())
}

/// Write the starter files under `root`. Existing files are kept unless
/// `overwrite` is set.
fn scaffold(root: &Path, overwrite: bool) -> Result<()> {
    let pages_dir = root.join("pages");
    fs::create_dir_all(&pages_dir).context("Failed to create pages directory")?;

    let files = [
        (root.join("site.toml"), DEFAULT_CONFIG),
        (root.join("content.toml"), DEFAULT_CONTENT),
        (pages_dir.join("privacy.md"), DEFAULT_PRIVACY),
        (pages_dir.join("terms.md"), DEFAULT_TERMS),
    ];

    for (path, source) in files {
        if path.exists() && !overwrite {
            tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
            continue;
        }
        fs::write(&path, source).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
    }

    Ok(())
}

const DEFAULT_CONFIG: &str = r##"# Site configuration

[site]
name = "Vedic Wisdom Series"
description = "Authentic Vedic education bridging ancient wisdom and modern understanding."
# Absolute origin, used for canonical URLs and the sitemap
url = "https://vedicwisdomseries.com"
base_url = "/"

[content]
# Overrides merged over the built-in content tables
file = "content.toml"

[build]
output = "dist"
pages_dir = "pages"
minify = true
# Extra reveal delay per card within a section
stagger_ms = 150

[theme]
primary = "#FF9933"
secondary = "#1E90FF"
tertiary = "#F2DB49"

[contact]
email = "contact@vedicwisdomseries.com"

[author]
name = "Dr. Nischaya Nagori"
title = "Vedic Scholar & Spiritual Guide"

[reveal]
direction = "from-bottom"
duration_ms = 800
distance = 50
threshold = 0.1
once = true
"##;

const DEFAULT_CONTENT: &str = r#"# Content overrides.
#
# Tables here are merged over the built-in content: a [heroes.<page>] or
# [ctas.<kind>] entry replaces the built-in one, [page_specific.<page>]
# fields are added one by one, and a list such as [[offerings]] replaces
# the whole built-in list.

[page_specific.homepage]
urgency = "Free discovery calls filling fast"
"#;

const DEFAULT_PRIVACY: &str = r#"---
title: Privacy Policy
description: How the Vedic Wisdom Series handles your personal information
order: 1
---

## Information we collect

We collect the details you share when you request a consultation or
download a guide: your name, email address and the message you send.

## How we use it

Your information is used only to respond to you and to send the material
you asked for. We never sell or share it with third parties.

## Contact

Questions about this policy can be sent to contact@vedicwisdomseries.com.
"#;

const DEFAULT_TERMS: &str = r#"---
title: Terms of Service
description: Terms for using the Vedic Wisdom Series site and programs
order: 2
---

## Use of the site

The teachings on this site are offered for personal study. Please do not
republish course material without permission.

## Programs and consultations

Program details, schedules and fees are confirmed in writing before
enrollment.
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::tempdir;

    #[test]
    fn scaffolds_starter_files() {
        let temp = tempdir().unwrap();

        scaffold(temp.path(), false).unwrap();

        for file in ["site.toml", "content.toml", "pages/privacy.md", "pages/terms.md"] {
            assert!(temp.path().join(file).exists(), "missing {}", file);
        }
    }

    #[test]
    fn keeps_existing_files_without_overwrite() {
        let temp = tempdir().unwrap();
        let site = temp.path().join("site.toml");
        fs::write(&site, "# mine\n").unwrap();

        scaffold(temp.path(), false).unwrap();
        assert_eq!(fs::read_to_string(&site).unwrap(), "# mine\n");

        scaffold(temp.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&site).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn scaffolded_files_load() {
        let temp = tempdir().unwrap();
        scaffold(temp.path(), false).unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();
        assert_eq!(config.site.url, "https://vedicwisdomseries.com");
        assert_eq!(config.build.stagger_ms, 150.0);

        let content = nishkaam_content::SiteContent::load(&temp.path().join("content.toml")).unwrap();
        assert!(content.validate().is_empty());
    }
}
