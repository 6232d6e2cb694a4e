//! Site-wide settings shared by every page.

use serde::{Deserialize, Serialize};

/// Brand colors injected into the stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Deep saffron
    pub primary: String,
    /// Serene blue
    pub secondary: String,
    /// Sacred gold
    pub tertiary: String,
    pub background: String,
    pub foreground: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#FF9933".to_string(),
            secondary: "#1E90FF".to_string(),
            tertiary: "#F2DB49".to_string(),
            background: "#ffffff".to_string(),
            foreground: "#1a202c".to_string(),
        }
    }
}

/// A main navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Default main navigation.
pub fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("About", "/about/"),
        NavLink::new("Teachings", "/teachings/"),
        NavLink::new("Testimonials", "/testimonials/"),
        NavLink::new("Contact", "/contact/"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "contact@vedicwisdomseries.com".to_string(),
            phone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorInfo {
    pub name: String,
    pub title: String,
}

impl Default for AuthorInfo {
    fn default() -> Self {
        Self {
            name: "Dr. Nischaya Nagori".to_string(),
            title: "Vedic Scholar & Spiritual Guide".to_string(),
        }
    }
}

/// Join a site-relative href onto the base URL. Absolute and anchor links
/// pass through.
pub fn join_url(base_url: &str, href: &str) -> String {
    match href.strip_prefix('/') {
        Some(rest) => format!("{}/{}", base_url.trim_end_matches('/'), rest),
        None => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_links_onto_base() {
        assert_eq!(join_url("/", "/contact"), "/contact");
        assert_eq!(join_url("/site/", "/contact/"), "/site/contact/");
        assert_eq!(join_url("/site", "/"), "/site/");
    }

    #[test]
    fn leaves_absolute_links_alone() {
        assert_eq!(
            join_url("/site/", "https://youtube.com/@drnischayanagori"),
            "https://youtube.com/@drnischayanagori"
        );
        assert_eq!(join_url("/site/", "mailto:a@b.c"), "mailto:a@b.c");
    }

    #[test]
    fn theme_defaults_to_brand_colors() {
        let theme = ThemeColors::default();
        assert_eq!(theme.primary, "#FF9933");
        assert_eq!(theme.secondary, "#1E90FF");
        assert_eq!(theme.tertiary, "#F2DB49");
    }
}
