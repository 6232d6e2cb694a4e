//! Site content tables and loading.
//!
//! Content is immutable once loaded. The built-in tables are embedded in the
//! crate; a user content file is overlaid on top of them so every lookup
//! table stays populated even when the file only overrides a few entries.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cta::CtaEntry;
use crate::page::HeroEntry;

const DEFAULT_CONTENT: &str = include_str!("../content/default.toml");

/// Value propositions, from headline down to support copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValuePropositions {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default)]
    pub tertiary: String,
    #[serde(default)]
    pub support: String,
}

/// A social proof statistic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub trend: String,
    #[serde(default)]
    pub color: String,
}

/// A core principle card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Principle {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// A program offering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Offering {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub price: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// One stage of the visitor journey, pointing at the CTA that serves it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JourneyStage {
    pub name: String,
    pub emotion: String,
    pub goal: String,
    pub content: String,
    pub cta: String,
}

/// A student testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub text: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

/// All content tables for the site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub value_propositions: ValuePropositions,

    /// CTA table keyed by kind name
    #[serde(default)]
    pub ctas: BTreeMap<String, CtaEntry>,

    /// Hero table keyed by page identifier
    #[serde(default)]
    pub heroes: BTreeMap<String, HeroEntry>,

    /// Supplemental per-page fields, shallow-merged over the hero
    #[serde(default)]
    pub page_specific: BTreeMap<String, BTreeMap<String, String>>,

    #[serde(default)]
    pub stats: Vec<Stat>,

    #[serde(default)]
    pub principles: Vec<Principle>,

    #[serde(default)]
    pub offerings: Vec<Offering>,

    #[serde(default)]
    pub journey: Vec<JourneyStage>,

    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

/// A user content file. Every section is optional.
#[derive(Debug, Default, Deserialize)]
struct ContentOverlay {
    value_propositions: Option<ValuePropositions>,
    #[serde(default)]
    ctas: BTreeMap<String, CtaEntry>,
    #[serde(default)]
    heroes: BTreeMap<String, HeroEntry>,
    #[serde(default)]
    page_specific: BTreeMap<String, BTreeMap<String, String>>,
    stats: Option<Vec<Stat>>,
    principles: Option<Vec<Principle>>,
    offerings: Option<Vec<Offering>>,
    journey: Option<Vec<JourneyStage>>,
    testimonials: Option<Vec<Testimonial>>,
}

impl SiteContent {
    /// The built-in content tables.
    pub fn builtin() -> Self {
        toml::from_str(DEFAULT_CONTENT).expect("built-in content must parse")
    }

    /// Parse a user content file and overlay it onto the built-in tables.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let overlay: ContentOverlay =
            toml::from_str(source).map_err(|e| ContentError::Parse(e.to_string()))?;

        let mut content = Self::builtin();
        content.apply(overlay);
        Ok(content)
    }

    /// Read and parse a user content file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = fs::read_to_string(path).map_err(|e| ContentError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let content = Self::from_toml_str(&source)?;
        tracing::debug!(
            "Loaded content from {} ({} heroes, {} CTAs)",
            path.display(),
            content.heroes.len(),
            content.ctas.len()
        );
        Ok(content)
    }

    fn apply(&mut self, overlay: ContentOverlay) {
        if let Some(props) = overlay.value_propositions {
            self.value_propositions = props;
        }

        self.ctas.extend(overlay.ctas);
        self.heroes.extend(overlay.heroes);

        for (page, fields) in overlay.page_specific {
            self.page_specific.entry(page).or_default().extend(fields);
        }

        if let Some(stats) = overlay.stats {
            self.stats = stats;
        }
        if let Some(principles) = overlay.principles {
            self.principles = principles;
        }
        if let Some(offerings) = overlay.offerings {
            self.offerings = offerings;
        }
        if let Some(journey) = overlay.journey {
            self.journey = journey;
        }
        if let Some(testimonials) = overlay.testimonials {
            self.testimonials = testimonials;
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse content: {0}")]
    Parse(String),
}
