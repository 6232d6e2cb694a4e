//! Content consistency checks.
//!
//! Rendering never fails on bad content; these checks exist so a build
//! pipeline can catch the typos the resolver would otherwise paper over.

use crate::colors::ColorScheme;
use crate::content::SiteContent;
use crate::cta::CtaKind;
use crate::icons::lookup_icon;

/// A problem found in the content tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    /// The CTA table has no entry for a kind
    MissingCta(CtaKind),
    /// A CTA table key is not a CTA kind
    UnknownCtaEntry(String),
    /// A hero or journey stage refers to an unknown CTA kind
    UnknownCtaReference { owner: String, key: String },
    /// There is no homepage hero to fall back on
    MissingHomepage,
    UnknownIcon { owner: String, key: String },
    UnknownColor { owner: String, key: String },
    /// A required text field is empty
    EmptyField { owner: String, field: &'static str },
}

impl std::fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentIssue::MissingCta(kind) => write!(f, "CTA table has no '{kind}' entry"),
            ContentIssue::UnknownCtaEntry(key) => {
                write!(f, "CTA table entry '{key}' is not a CTA kind")
            }
            ContentIssue::UnknownCtaReference { owner, key } => {
                write!(f, "{owner} refers to unknown CTA kind '{key}'")
            }
            ContentIssue::MissingHomepage => write!(f, "hero table has no 'homepage' entry"),
            ContentIssue::UnknownIcon { owner, key } => {
                write!(f, "{owner} uses unknown icon '{key}'")
            }
            ContentIssue::UnknownColor { owner, key } => {
                write!(f, "{owner} uses unknown color '{key}'")
            }
            ContentIssue::EmptyField { owner, field } => write!(f, "{owner} has an empty {field}"),
        }
    }
}

impl SiteContent {
    /// Check the tables for dangling keys and empty required fields.
    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        for kind in CtaKind::ALL {
            if !self.ctas.contains_key(kind.as_str()) {
                issues.push(ContentIssue::MissingCta(kind));
            }
        }

        for (key, entry) in &self.ctas {
            let owner = format!("CTA '{key}'");
            if CtaKind::parse(key).is_none() {
                issues.push(ContentIssue::UnknownCtaEntry(key.clone()));
            }
            check_text(&mut issues, &owner, "text", &entry.text);
            check_text(&mut issues, &owner, "href", &entry.href);
            check_icon(&mut issues, &owner, &entry.icon);
            check_color(&mut issues, &owner, &entry.color_scheme);
        }

        if !self.heroes.contains_key("homepage") {
            issues.push(ContentIssue::MissingHomepage);
        }

        for (page, hero) in &self.heroes {
            let owner = format!("hero '{page}'");
            check_text(&mut issues, &owner, "headline", &hero.headline);
            check_text(&mut issues, &owner, "subheading", &hero.subheading);
            check_text(&mut issues, &owner, "description", &hero.description);
            check_cta_reference(&mut issues, &owner, &hero.primary_cta);
            check_cta_reference(&mut issues, &owner, &hero.secondary_cta);
        }

        for stage in &self.journey {
            check_cta_reference(&mut issues, &format!("journey stage '{}'", stage.name), &stage.cta);
        }

        for stat in &self.stats {
            check_color(&mut issues, &format!("stat '{}'", stat.label), &stat.color);
        }

        for principle in &self.principles {
            check_icon(
                &mut issues,
                &format!("principle '{}'", principle.title),
                &principle.icon,
            );
        }

        for offering in &self.offerings {
            check_color(
                &mut issues,
                &format!("offering '{}'", offering.title),
                &offering.color,
            );
        }

        issues
    }
}

fn check_text(issues: &mut Vec<ContentIssue>, owner: &str, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ContentIssue::EmptyField {
            owner: owner.to_string(),
            field,
        });
    }
}

fn check_cta_reference(issues: &mut Vec<ContentIssue>, owner: &str, key: &str) {
    if CtaKind::parse(key).is_none() {
        issues.push(ContentIssue::UnknownCtaReference {
            owner: owner.to_string(),
            key: key.to_string(),
        });
    }
}

// Empty icon and color keys are allowed; they pick the defaults on purpose.
fn check_icon(issues: &mut Vec<ContentIssue>, owner: &str, key: &str) {
    if !key.is_empty() && lookup_icon(key).is_none() {
        issues.push(ContentIssue::UnknownIcon {
            owner: owner.to_string(),
            key: key.to_string(),
        });
    }
}

fn check_color(issues: &mut Vec<ContentIssue>, owner: &str, key: &str) {
    if !key.is_empty() && ColorScheme::parse(key).is_none() {
        issues.push(ContentIssue::UnknownColor {
            owner: owner.to_string(),
            key: key.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_content_is_clean() {
        assert_eq!(SiteContent::builtin().validate(), vec![]);
    }

    #[test]
    fn reports_dangling_cta_reference() {
        let content = SiteContent::from_toml_str(
            r#"
[heroes.schedule]
headline = "Upcoming Sessions"
subheading = "Weekend discourses and chanting classes"
description = "Find a session that fits your week."
primary_cta = "primry"
secondary_cta = "secondary"
"#,
        )
        .unwrap();

        assert_eq!(
            content.validate(),
            vec![ContentIssue::UnknownCtaReference {
                owner: "hero 'schedule'".to_string(),
                key: "primry".to_string(),
            }]
        );
    }

    #[test]
    fn reports_unknown_cta_entry_icon_and_color() {
        let content = SiteContent::from_toml_str(
            r#"
[ctas.urgent]
text = "Call Now"
href = "/contact"
icon = "FaRocket"
color_scheme = "teal"
"#,
        )
        .unwrap();

        let issues = content.validate();

        assert!(issues.contains(&ContentIssue::UnknownCtaEntry("urgent".to_string())));
        assert!(issues.contains(&ContentIssue::UnknownIcon {
            owner: "CTA 'urgent'".to_string(),
            key: "FaRocket".to_string(),
        }));
        assert!(issues.contains(&ContentIssue::UnknownColor {
            owner: "CTA 'urgent'".to_string(),
            key: "teal".to_string(),
        }));
    }

    #[test]
    fn reports_missing_tables() {
        let mut content = SiteContent::builtin();
        content.heroes.remove("homepage");
        content.ctas.remove("emergency");

        let issues = content.validate();

        assert!(issues.contains(&ContentIssue::MissingHomepage));
        assert!(issues.contains(&ContentIssue::MissingCta(CtaKind::Emergency)));
        // contact hero still points at the removed kind, but the key itself is valid
        assert!(!issues
            .iter()
            .any(|i| matches!(i, ContentIssue::UnknownCtaReference { .. })));
    }

    #[test]
    fn reports_empty_fields() {
        let mut content = SiteContent::builtin();
        if let Some(hero) = content.heroes.get_mut("about") {
            hero.headline = "  ".to_string();
        }

        assert_eq!(
            content.validate(),
            vec![ContentIssue::EmptyField {
                owner: "hero 'about'".to_string(),
                field: "headline",
            }]
        );
    }

    #[test]
    fn issues_display_readably() {
        let issue = ContentIssue::UnknownCtaReference {
            owner: "hero 'contact'".to_string(),
            key: "urgent".to_string(),
        };

        assert_eq!(
            issue.to_string(),
            "hero 'contact' refers to unknown CTA kind 'urgent'"
        );
    }
}
