//! Frontmatter extraction for markdown pages.

use serde::Deserialize;

/// Parsed frontmatter from a markdown page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Page title (required)
    pub title: String,

    /// Page description for SEO
    #[serde(default)]
    pub description: Option<String>,

    /// Order among footer links (lower = first)
    #[serde(default)]
    pub order: Option<i32>,

    /// Whether to list the page in the footer
    #[serde(default = "default_true")]
    pub nav: bool,

    /// Custom slug override
    #[serde(default)]
    pub slug: Option<String>,

    /// "Last updated" date shown under the title
    #[serde(default, alias = "last_updated")]
    pub updated: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Frontmatter {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            order: None,
            nav: true,
            slug: None,
            updated: None,
        }
    }
}

const FENCE: &str = "---";

/// Split a markdown page into its frontmatter and body.
///
/// The block must open on the first line. Legal pages are often pasted from
/// word processors, so a leading byte order mark and CRLF line endings are
/// accepted. The closing fence is the first line that is exactly `---`.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let yaml_start = match lines.next() {
        Some(first) if first.trim_end() == FENCE => first.len(),
        _ => return Ok((None, source)),
    };

    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            let frontmatter: Frontmatter = serde_yaml::from_str(&source[yaml_start..offset])
                .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;
            let body = &source[offset + line.len()..];
            return Ok((Some(frontmatter), body.trim_start()));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unclosed)
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("frontmatter opened with --- is never closed")]
    Unclosed,

    #[error("frontmatter is not valid: {0}")]
    InvalidYaml(String),
}
