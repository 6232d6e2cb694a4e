//! Page content resolution.
//!
//! The resolver is a read-only view over [`SiteContent`]. Every lookup is
//! total: an unknown page, CTA kind, icon or color key degrades to a
//! documented default and is reported as a [`Fallback`] instead of failing.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::colors::ColorScheme;
use crate::content::SiteContent;
use crate::cta::{CtaDescriptor, CtaEntry, CtaKind};
use crate::icons::{lookup_icon, IconHandle};
use crate::page::{ContentBundle, HeroEntry, PageId};

/// Hero key every unknown page falls back to.
pub const FALLBACK_PAGE: &str = "homepage";

/// A lookup that degraded to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Page has no hero entry; the homepage was used
    UnknownPage(String),
    /// Not even the homepage hero exists; placeholder copy was used
    MissingHero,
    /// Key is not a CTA kind; the primary CTA was used
    UnknownCtaKey(String),
    /// CTA table has no entry for the kind; primary (or a placeholder) was used
    MissingCta(CtaKind),
    /// Icon key is not in the icon table; the default icon was used
    UnknownIcon(String),
    /// Color key is not a known scheme; the default scheme was used
    UnknownColor(String),
    /// Hero text field was blank; the homepage (or placeholder) text was used
    EmptyField { page: String, field: &'static str },
}

impl std::fmt::Display for Fallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fallback::UnknownPage(page) => {
                write!(f, "unknown page '{page}', using '{FALLBACK_PAGE}'")
            }
            Fallback::MissingHero => write!(f, "no '{FALLBACK_PAGE}' hero, using placeholder"),
            Fallback::UnknownCtaKey(key) => write!(f, "unknown CTA kind '{key}', using 'primary'"),
            Fallback::MissingCta(kind) => write!(f, "no '{kind}' CTA entry, using 'primary'"),
            Fallback::UnknownIcon(key) => {
                write!(f, "unknown icon '{key}', using '{}'", IconHandle::DEFAULT)
            }
            Fallback::UnknownColor(key) => {
                write!(f, "unknown color '{key}', using '{}'", ColorScheme::DEFAULT.as_str())
            }
            Fallback::EmptyField { page, field } => {
                write!(f, "page '{page}' has an empty {field}, using '{FALLBACK_PAGE}'")
            }
        }
    }
}

/// Callback invoked for every degraded lookup.
pub type FallbackHook = Arc<dyn Fn(&Fallback) + Send + Sync>;

/// Resolves page content bundles and CTA descriptors.
#[derive(Clone)]
pub struct ContentResolver {
    content: Arc<SiteContent>,
    hook: Option<FallbackHook>,
}

impl std::fmt::Debug for ContentResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentResolver")
            .field("heroes", &self.content.heroes.len())
            .field("ctas", &self.content.ctas.len())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl ContentResolver {
    /// Create a resolver over the given content.
    pub fn new(content: Arc<SiteContent>) -> Self {
        Self {
            content,
            hook: None,
        }
    }

    /// Create a resolver over the built-in content.
    pub fn builtin() -> Self {
        Self::new(Arc::new(SiteContent::builtin()))
    }

    /// Attach a hook that observes every fallback.
    pub fn with_fallback_hook(mut self, hook: impl Fn(&Fallback) + Send + Sync + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// The underlying content tables.
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub(crate) fn report(&self, fallback: Fallback) {
        tracing::warn!("content fallback: {}", fallback);
        if let Some(hook) = &self.hook {
            hook(&fallback);
        }
    }

    /// Resolve a CTA kind into a descriptor.
    ///
    /// A kind missing from the table degrades to `primary`, and a missing
    /// `primary` to a built-in placeholder.
    pub fn resolve_cta(&self, kind: CtaKind) -> CtaDescriptor {
        let (kind, entry) = match self.content.ctas.get(kind.as_str()) {
            Some(entry) => (kind, Cow::Borrowed(entry)),
            None => {
                self.report(Fallback::MissingCta(kind));
                let entry = match self.content.ctas.get(CtaKind::Primary.as_str()) {
                    Some(entry) => Cow::Borrowed(entry),
                    None => Cow::Owned(CtaEntry::placeholder()),
                };
                (CtaKind::Primary, entry)
            }
        };

        CtaDescriptor {
            kind,
            text: entry.text.clone(),
            description: entry.description.clone(),
            target_url: entry.href.clone(),
            color_key: entry.color_scheme.clone(),
            color: self.color(&entry.color_scheme),
            visual_style: entry.variant,
            icon: self.icon(&entry.icon),
            urgency_note: entry.urgency.clone(),
        }
    }

    /// Resolve a CTA by its string key. Unknown keys resolve as `primary`.
    pub fn resolve_cta_key(&self, key: &str) -> CtaDescriptor {
        match CtaKind::parse(key) {
            Some(kind) => self.resolve_cta(kind),
            None => {
                self.report(Fallback::UnknownCtaKey(key.to_string()));
                self.resolve_cta(CtaKind::Primary)
            }
        }
    }

    /// Resolve a known page.
    pub fn resolve_page(&self, page: PageId) -> ContentBundle {
        self.resolve_page_content(page.as_str())
    }

    /// Resolve the content bundle for a page.
    ///
    /// Unknown pages resolve as the homepage. Page-specific fields override
    /// hero fields of the same name; the rest are carried in `extras`. Hero
    /// text left blank takes the homepage text, then the placeholder.
    pub fn resolve_page_content(&self, page: &str) -> ContentBundle {
        let (page, hero) = self.hero(page);

        let mut headline = hero.headline.clone();
        let mut subheading = hero.subheading.clone();
        let mut description = hero.description.clone();
        let mut social_proof = hero.social_proof.clone();
        let mut urgency = hero.urgency.clone();
        let mut primary_key = hero.primary_cta.clone();
        let mut secondary_key = hero.secondary_cta.clone();
        let mut extras = BTreeMap::new();

        if let Some(fields) = self.content.page_specific.get(page) {
            for (key, value) in fields {
                let slot = match key.as_str() {
                    "headline" => &mut headline,
                    "subheading" => &mut subheading,
                    "description" => &mut description,
                    "social_proof" => &mut social_proof,
                    "urgency" => &mut urgency,
                    "primary_cta" => &mut primary_key,
                    "secondary_cta" => &mut secondary_key,
                    _ => {
                        extras.insert(key.clone(), value.clone());
                        continue;
                    }
                };
                // An empty override would blank a required field.
                if !value.trim().is_empty() {
                    *slot = value.clone();
                }
            }
        }

        for (field, slot) in [
            ("headline", &mut headline),
            ("subheading", &mut subheading),
            ("description", &mut description),
            ("social_proof", &mut social_proof),
            ("urgency", &mut urgency),
        ] {
            if slot.trim().is_empty() {
                self.report(Fallback::EmptyField {
                    page: page.to_string(),
                    field,
                });
                *slot = self.fallback_text(page, field);
            }
        }

        ContentBundle {
            page: page.to_string(),
            headline,
            subheading,
            description,
            primary_cta: self.resolve_cta_key(&primary_key),
            secondary_cta: self.resolve_cta_key(&secondary_key),
            social_proof_text: social_proof,
            urgency_text: urgency,
            extras,
        }
    }

    fn hero<'a>(&'a self, page: &'a str) -> (&'a str, Cow<'a, HeroEntry>) {
        if let Some(hero) = self.content.heroes.get(page) {
            return (page, Cow::Borrowed(hero));
        }

        if page != FALLBACK_PAGE {
            self.report(Fallback::UnknownPage(page.to_string()));
        }

        match self.content.heroes.get(FALLBACK_PAGE) {
            Some(hero) => (FALLBACK_PAGE, Cow::Borrowed(hero)),
            None => {
                self.report(Fallback::MissingHero);
                (FALLBACK_PAGE, Cow::Owned(HeroEntry::placeholder()))
            }
        }
    }

    fn fallback_text(&self, page: &str, field: &str) -> String {
        let homepage = match self.content.heroes.get(FALLBACK_PAGE) {
            Some(hero) if page != FALLBACK_PAGE => hero.text(field),
            _ => None,
        };
        match homepage {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => HeroEntry::placeholder().text(field).unwrap_or_default().to_string(),
        }
    }

    /// Resolve an icon key, reporting unknown non-empty keys.
    pub fn icon(&self, key: &str) -> IconHandle {
        match lookup_icon(key) {
            Some(handle) => handle,
            None => {
                if !key.is_empty() {
                    self.report(Fallback::UnknownIcon(key.to_string()));
                }
                IconHandle::DEFAULT
            }
        }
    }

    /// Resolve a color key, reporting unknown non-empty keys.
    pub fn color(&self, key: &str) -> ColorScheme {
        match ColorScheme::parse(key) {
            Some(scheme) => scheme,
            None => {
                if !key.is_empty() {
                    self.report(Fallback::UnknownColor(key.to_string()));
                }
                ColorScheme::DEFAULT
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cta::VisualStyle;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    fn recording(content: SiteContent) -> (ContentResolver, Arc<Mutex<Vec<Fallback>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let resolver = ContentResolver::new(Arc::new(content))
            .with_fallback_hook(move |f| sink.lock().unwrap().push(f.clone()));
        (resolver, seen)
    }

    fn assert_populated(bundle: &ContentBundle) {
        for (name, value) in [
            ("headline", &bundle.headline),
            ("subheading", &bundle.subheading),
            ("description", &bundle.description),
            ("social_proof_text", &bundle.social_proof_text),
            ("urgency_text", &bundle.urgency_text),
            ("primary_cta.text", &bundle.primary_cta.text),
            ("primary_cta.target_url", &bundle.primary_cta.target_url),
            ("secondary_cta.text", &bundle.secondary_cta.text),
            ("secondary_cta.target_url", &bundle.secondary_cta.target_url),
        ] {
            assert!(!value.is_empty(), "{name} is empty for {}", bundle.page);
        }
    }

    #[test]
    fn resolves_homepage() {
        let bundle = ContentResolver::builtin().resolve_page_content("homepage");

        assert_eq!(bundle.page, "homepage");
        assert_eq!(
            bundle.headline,
            "The MIT Discovery That Proves Your Soul Is Real"
        );
        assert_eq!(bundle.primary_cta.text, "Claim Your Free Discovery Call");
        assert_eq!(bundle.primary_cta.icon, IconHandle::CalendarCheck);
        assert_eq!(bundle.primary_cta.color, ColorScheme::Orange);
        assert_eq!(bundle.secondary_cta.kind, CtaKind::Secondary);
        assert_eq!(bundle.secondary_cta.visual_style, VisualStyle::Outline);
        assert_eq!(bundle.secondary_cta.icon, IconHandle::Book);
        assert!(bundle.extras.is_empty());
    }

    #[test]
    fn contact_page_uses_emergency_cta() {
        let resolver = ContentResolver::builtin();

        let bundle = resolver.resolve_page(PageId::Contact);

        assert_eq!(bundle.primary_cta, resolver.resolve_cta(CtaKind::Emergency));
        assert_eq!(bundle.primary_cta.text, "Speak With Dr. Nischaya Today");
        assert_eq!(bundle.primary_cta.icon, IconHandle::Phone);
        assert_eq!(bundle.primary_cta.color, ColorScheme::Red);
    }

    #[test]
    fn every_page_resolves_fully() {
        let resolver = ContentResolver::builtin();

        for page in PageId::ALL {
            let bundle = resolver.resolve_page(page);
            assert_eq!(bundle.page, page.as_str());
            assert_populated(&bundle);
        }
    }

    #[test]
    fn unknown_pages_fall_back_to_homepage() {
        let (resolver, seen) = recording(SiteContent::builtin());
        let homepage = resolver.resolve_page_content("homepage");

        for page in ["", "schedule", "Homepage", "contact/", "../about"] {
            let bundle = resolver.resolve_page_content(page);
            assert_eq!(bundle, homepage, "page {page:?}");
            assert_populated(&bundle);
        }

        assert_eq!(
            seen.lock().unwrap()[1],
            Fallback::UnknownPage("schedule".to_string())
        );
        assert_eq!(seen.lock().unwrap().len(), 5);
    }

    #[test]
    fn unknown_cta_keys_fall_back_to_primary() {
        let (resolver, seen) = recording(SiteContent::builtin());
        let primary = resolver.resolve_cta(CtaKind::Primary);

        for key in ["", "primry", "PRIMARY", "urgent"] {
            assert_eq!(resolver.resolve_cta_key(key), primary, "key {key:?}");
        }

        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[
                Fallback::UnknownCtaKey(String::new()),
                Fallback::UnknownCtaKey("primry".to_string()),
                Fallback::UnknownCtaKey("PRIMARY".to_string()),
                Fallback::UnknownCtaKey("urgent".to_string()),
            ]
        );
    }

    #[test]
    fn known_lookups_report_nothing() {
        let (resolver, seen) = recording(SiteContent::builtin());

        for page in PageId::ALL {
            resolver.resolve_page(page);
        }
        for kind in CtaKind::ALL {
            resolver.resolve_cta(kind);
        }

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_cta_entry_degrades_to_primary() {
        let mut content = SiteContent::builtin();
        content.ctas.remove("emergency");
        let (resolver, seen) = recording(content);

        let bundle = resolver.resolve_page(PageId::Contact);

        assert_eq!(bundle.primary_cta.kind, CtaKind::Primary);
        assert_eq!(bundle.primary_cta.text, "Claim Your Free Discovery Call");
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[Fallback::MissingCta(CtaKind::Emergency)]
        );
    }

    #[test]
    fn empty_tables_still_resolve() {
        let mut content = SiteContent::builtin();
        content.ctas.clear();
        content.heroes.clear();
        content.page_specific.clear();
        let (resolver, seen) = recording(content);

        let bundle = resolver.resolve_page_content("about");

        assert_populated(&bundle);
        assert_eq!(bundle.page, "homepage");
        assert_eq!(bundle.primary_cta.text, "Get in Touch");
        assert_eq!(bundle.primary_cta.icon, IconHandle::DEFAULT);
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], Fallback::UnknownPage("about".to_string()));
        assert_eq!(seen[1], Fallback::MissingHero);
    }

    #[test]
    fn page_specific_fields_become_extras() {
        let bundle = ContentResolver::builtin().resolve_page(PageId::About);

        assert_eq!(
            bundle.extra("journey_title"),
            Some("From Ancient Wisdom to Quantum Understanding")
        );
        assert_eq!(bundle.extra("credentials_title"), Some("Proven Expertise"));
        assert_eq!(bundle.headline, "Meet Your Guide Between Two Worlds");
        assert_eq!(bundle.secondary_cta.kind, CtaKind::Tertiary);
    }

    #[test]
    fn page_specific_fields_shadow_hero_fields() {
        let content = SiteContent::from_toml_str(
            r#"
[page_specific.teachings]
headline = "Four Paths, One Awakening"
primary_cta = "tertiary"
urgency = ""
"#,
        )
        .unwrap();
        let resolver = ContentResolver::new(Arc::new(content));

        let bundle = resolver.resolve_page(PageId::Teachings);

        assert_eq!(bundle.headline, "Four Paths, One Awakening");
        assert_eq!(
            bundle.subheading,
            "4 Transformative Programs That Bridge Science & Spirituality"
        );
        assert_eq!(bundle.primary_cta.kind, CtaKind::Tertiary);
        assert_eq!(bundle.urgency_text, "Enrollment closes soon");
        assert_eq!(bundle.extra("programs_title"), Some("4 Paths to Transformation"));
        assert_eq!(bundle.extra("headline"), None);
    }

    #[test]
    fn unknown_icon_and_color_are_reported() {
        let content = SiteContent::from_toml_str(
            r#"
[ctas.tertiary]
text = "Join the Community"
href = "/testimonials"
icon = "FaRocket"
color_scheme = "teal"
"#,
        )
        .unwrap();
        let (resolver, seen) = recording(content);

        let cta = resolver.resolve_cta(CtaKind::Tertiary);

        assert_eq!(cta.icon, IconHandle::Om);
        assert_eq!(cta.color, ColorScheme::Yellow);
        assert_eq!(cta.color_key, "teal");
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[
                Fallback::UnknownColor("teal".to_string()),
                Fallback::UnknownIcon("FaRocket".to_string()),
            ]
        );
    }

    #[test]
    fn blank_hero_text_takes_homepage_text() {
        let content = SiteContent::from_toml_str(
            r#"
[heroes.about]
headline = ""
subheading = "Meet Your Guide"
description = "   "
primary_cta = "primary"
secondary_cta = "secondary"
"#,
        )
        .unwrap();
        let (resolver, seen) = recording(content);
        let homepage = resolver.resolve_page(PageId::Homepage);

        let bundle = resolver.resolve_page(PageId::About);

        assert_populated(&bundle);
        assert_eq!(bundle.page, "about");
        assert_eq!(bundle.headline, homepage.headline);
        assert_eq!(bundle.subheading, "Meet Your Guide");
        assert_eq!(bundle.description, homepage.description);
        assert_eq!(bundle.social_proof_text, homepage.social_proof_text);
        assert_eq!(bundle.urgency_text, homepage.urgency_text);
        assert_eq!(
            seen.lock().unwrap()[0],
            Fallback::EmptyField {
                page: "about".to_string(),
                field: "headline",
            }
        );
        assert_eq!(seen.lock().unwrap().len(), 4);
    }

    #[test]
    fn blank_homepage_text_takes_placeholder() {
        let mut content = SiteContent::builtin();
        if let Some(hero) = content.heroes.get_mut("homepage") {
            hero.headline.clear();
        }
        let resolver = ContentResolver::new(Arc::new(content));

        let bundle = resolver.resolve_page_content("homepage");

        assert_eq!(bundle.headline, "Vedic Wisdom Series");
        assert_populated(&bundle);
    }
}
