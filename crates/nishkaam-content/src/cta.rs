//! Call-to-action kinds, configured entries and resolved descriptors.

use serde::{Deserialize, Serialize};

use crate::colors::ColorScheme;
use crate::icons::IconHandle;

/// Symbolic CTA kind. Hero entries refer to CTAs by this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaKind {
    Primary,
    Secondary,
    Tertiary,
    Emergency,
}

impl CtaKind {
    pub const ALL: [CtaKind; 4] = [
        CtaKind::Primary,
        CtaKind::Secondary,
        CtaKind::Tertiary,
        CtaKind::Emergency,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "primary" => Some(CtaKind::Primary),
            "secondary" => Some(CtaKind::Secondary),
            "tertiary" => Some(CtaKind::Tertiary),
            "emergency" => Some(CtaKind::Emergency),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CtaKind::Primary => "primary",
            CtaKind::Secondary => "secondary",
            CtaKind::Tertiary => "tertiary",
            CtaKind::Emergency => "emergency",
        }
    }
}

impl std::fmt::Display for CtaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Button treatment for a CTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    #[default]
    Solid,
    Outline,
    Ghost,
}

impl VisualStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualStyle::Solid => "solid",
            VisualStyle::Outline => "outline",
            VisualStyle::Ghost => "ghost",
        }
    }
}

/// A CTA as written in the content tables. Icon and color are still keys.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CtaEntry {
    pub text: String,
    #[serde(default)]
    pub description: String,
    pub href: String,
    #[serde(default)]
    pub color_scheme: String,
    #[serde(default)]
    pub variant: VisualStyle,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub urgency: String,
}

impl CtaEntry {
    /// Entry used when the table has neither the requested kind nor `primary`.
    pub(crate) fn placeholder() -> Self {
        Self {
            text: "Get in Touch".to_string(),
            description: "Reach out to start your journey".to_string(),
            href: "/contact".to_string(),
            color_scheme: "orange".to_string(),
            variant: VisualStyle::Solid,
            icon: IconHandle::DEFAULT.name().to_string(),
            urgency: "We respond within 24 hours".to_string(),
        }
    }
}

/// A fully resolved CTA, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaDescriptor {
    /// Kind the descriptor was resolved as (after any fallback)
    pub kind: CtaKind,
    pub text: String,
    pub description: String,
    pub target_url: String,
    /// Color key as configured
    pub color_key: String,
    /// Resolved color scheme
    pub color: ColorScheme,
    pub visual_style: VisualStyle,
    /// Resolved icon handle
    pub icon: IconHandle,
    pub urgency_note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_kinds() {
        for kind in CtaKind::ALL {
            assert_eq!(CtaKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(CtaKind::parse("primry"), None);
        assert_eq!(CtaKind::parse("Primary"), None);
    }

    #[test]
    fn variant_defaults_to_solid() {
        let entry: CtaEntry = toml::from_str(
            r#"
text = "Book"
href = "/contact"
"#,
        )
        .unwrap();

        assert_eq!(entry.variant, VisualStyle::Solid);
        assert!(entry.icon.is_empty());
    }
}
