//! Configuration file (site.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;

use nishkaam_content::{ContentResolver, SiteContent};
use nishkaam_reveal::RevealConfig;
use nishkaam_static::{AuthorInfo, BuildConfig, ContactInfo, NavLink, ThemeColors};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub theme: ThemeColors,
    /// Main navigation; the built-in pages when absent
    pub nav: Option<Vec<NavLink>>,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub author: AuthorInfo,
    /// Reveal animation for section cards
    #[serde(default)]
    pub reveal: RevealConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Absolute origin for canonical URLs
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            url: default_url(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ContentSettings {
    /// Content file overlaid on the built-in tables
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,
    #[serde(default = "default_minify")]
    pub minify: bool,
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: f64,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            pages_dir: default_pages_dir(),
            minify: default_minify(),
            stagger_ms: default_stagger_ms(),
        }
    }
}

fn default_name() -> String {
    BuildConfig::default().site_name
}
fn default_description() -> String {
    BuildConfig::default().site_description
}
fn default_url() -> String {
    BuildConfig::default().site_url
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_output() -> PathBuf {
    PathBuf::from("dist")
}
fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}
fn default_minify() -> bool {
    true
}
fn default_stagger_ms() -> f64 {
    150.0
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

impl ConfigFile {
    /// Site content: the built-in tables with the configured file overlaid.
    pub fn load_content(&self) -> Result<SiteContent> {
        match &self.content.file {
            Some(path) => SiteContent::load(path)
                .with_context(|| format!("Failed to load content from {}", path.display())),
            None => Ok(SiteContent::builtin()),
        }
    }

    pub fn resolver(&self) -> Result<ContentResolver> {
        Ok(ContentResolver::new(Arc::new(self.load_content()?)))
    }

    /// Build settings with command-line overrides applied.
    pub fn build_config(&self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        BuildConfig {
            pages_dir: self.build.pages_dir.clone(),
            output_dir: output.unwrap_or_else(|| self.build.output.clone()),
            minify: minify.unwrap_or(self.build.minify),
            base_url: self.site.base_url.clone(),
            site_url: self.site.url.clone(),
            site_name: self.site.name.clone(),
            site_description: self.site.description.clone(),
            theme: self.theme.clone(),
            nav: self.nav.clone().unwrap_or_else(nishkaam_static::site::default_nav),
            contact: self.contact.clone(),
            author: self.author.clone(),
            reveal: self.reveal,
            stagger_ms: self.build.stagger_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nishkaam_reveal::SlideDirection;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config.site.name, "Vedic Wisdom Series");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(config.build.minify);
        assert!(config.content.file.is_none());
    }

    #[test]
    fn parses_partial_sections() {
        let config: ConfigFile = toml::from_str(
            r##"
[site]
url = "https://example.org"

[build]
minify = false

[theme]
primary = "#cc5500"

[reveal]
direction = "from-left"
threshold = 0.3

[[nav]]
label = "Home"
href = "/"
"##,
        )
        .unwrap();

        assert_eq!(config.site.url, "https://example.org");
        assert_eq!(config.site.name, "Vedic Wisdom Series");
        assert!(!config.build.minify);
        assert_eq!(config.build.stagger_ms, 150.0);
        assert_eq!(config.theme.primary, "#cc5500");
        assert_eq!(config.theme.secondary, "#1E90FF");
        assert_eq!(config.reveal.direction, SlideDirection::FromLeft);
        assert_eq!(config.reveal.threshold, 0.3);
        assert_eq!(config.reveal.duration_ms, 800.0);
        assert_eq!(config.nav.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\nname = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn command_line_overrides_win() {
        let config = ConfigFile::default();

        let build = config.build_config(Some(PathBuf::from("public")), Some(false));

        assert_eq!(build.output_dir, PathBuf::from("public"));
        assert!(!build.minify);
        assert_eq!(build.nav.len(), 5);
    }

    #[test]
    fn overlays_configured_content_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("content.toml");
        fs::write(
            &path,
            "[page_specific.teachings]\nprograms_title = \"3 Paths\"\n",
        )
        .unwrap();
        let config = ConfigFile {
            content: ContentSettings { file: Some(path) },
            ..Default::default()
        };

        let bundle = config.resolver().unwrap().resolve_page_content("teachings");

        assert_eq!(bundle.extra("programs_title"), Some("3 Paths"));
    }

    #[test]
    fn missing_content_file_is_an_error() {
        let temp = tempdir().unwrap();
        let config = ConfigFile {
            content: ContentSettings {
                file: Some(temp.path().join("nope.toml")),
            },
            ..Default::default()
        };

        assert!(config.load_content().is_err());
    }
}
