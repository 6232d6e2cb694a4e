//! Page identifiers, hero entries and resolved content bundles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cta::CtaDescriptor;

/// A page that carries a hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Homepage,
    About,
    Teachings,
    Contact,
    Testimonials,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Homepage,
        PageId::About,
        PageId::Teachings,
        PageId::Contact,
        PageId::Testimonials,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "homepage" => Some(PageId::Homepage),
            "about" => Some(PageId::About),
            "teachings" => Some(PageId::Teachings),
            "contact" => Some(PageId::Contact),
            "testimonials" => Some(PageId::Testimonials),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Homepage => "homepage",
            PageId::About => "about",
            PageId::Teachings => "teachings",
            PageId::Contact => "contact",
            PageId::Testimonials => "testimonials",
        }
    }

    /// URL path segment; the homepage lives at the site root.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Homepage => "",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hero copy for one page, with CTA kinds as unresolved keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroEntry {
    pub headline: String,
    pub subheading: String,
    pub description: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    #[serde(default)]
    pub social_proof: String,
    #[serde(default)]
    pub urgency: String,
}

impl HeroEntry {
    /// Hero used when the table has no homepage entry to fall back on.
    pub(crate) fn placeholder() -> Self {
        Self {
            headline: "Vedic Wisdom Series".to_string(),
            subheading: "Ancient Sound, Modern Awakening".to_string(),
            description: "Authentic Vedic education bridging ancient wisdom and modern understanding."
                .to_string(),
            primary_cta: "primary".to_string(),
            secondary_cta: "secondary".to_string(),
            social_proof: "Seekers from around the world".to_string(),
            urgency: "Begin your journey today".to_string(),
        }
    }

    /// Text field by name.
    pub(crate) fn text(&self, field: &str) -> Option<&str> {
        match field {
            "headline" => Some(&self.headline),
            "subheading" => Some(&self.subheading),
            "description" => Some(&self.description),
            "social_proof" => Some(&self.social_proof),
            "urgency" => Some(&self.urgency),
            _ => None,
        }
    }
}

/// Fully resolved hero and CTA content for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBundle {
    /// Hero key the bundle was resolved from (after any fallback)
    pub page: String,
    pub headline: String,
    pub subheading: String,
    pub description: String,
    pub primary_cta: CtaDescriptor,
    pub secondary_cta: CtaDescriptor,
    pub social_proof_text: String,
    pub urgency_text: String,
    /// Page-specific fields with no hero counterpart
    pub extras: BTreeMap<String, String>,
}

impl ContentBundle {
    /// Look up a page-specific extra field.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pages() {
        for page in PageId::ALL {
            assert_eq!(PageId::parse(page.as_str()), Some(page));
        }
        assert_eq!(PageId::parse("schedule"), None);
    }

    #[test]
    fn homepage_has_empty_slug() {
        assert_eq!(PageId::Homepage.slug(), "");
        assert_eq!(PageId::Contact.slug(), "contact");
    }
}
