//! Template-facing views of resolved content.
//!
//! Everything here is plain serializable data: icons carry their CSS class
//! and glyph, colors their scheme key, and every animated element its
//! initial reveal style.

use std::collections::BTreeMap;

use serde::Serialize;

use nishkaam_content::{
    ContentResolver, CtaDescriptor, CtaKind, IconHandle, PageId, ValuePropositions,
};
use nishkaam_reveal::{RevealConfig, RevealController};

use crate::site::join_url;

/// Reveal attributes for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealAttrs {
    /// Initial inline style (the hidden state)
    pub style: String,
    /// JSON config read by the reveal runtime
    pub data: String,
}

impl RevealAttrs {
    pub fn new(config: RevealConfig) -> Self {
        let controller = RevealController::new(config);
        let style = controller.compute_style().to_css();
        let data = serde_json::to_string(controller.config()).unwrap_or_else(|e| {
            tracing::warn!("Failed to serialize reveal config: {}", e);
            "{}".to_string()
        });

        Self { style, data }
    }

    /// Attributes for a named preset, or the default config.
    pub fn preset(name: &str) -> Self {
        Self::new(RevealConfig::preset(name).unwrap_or_default())
    }
}

/// An item with its own reveal attributes.
#[derive(Debug, Clone, Serialize)]
pub struct Card<T> {
    #[serde(flatten)]
    pub item: T,
    pub reveal: RevealAttrs,
}

fn cards<T>(items: impl IntoIterator<Item = T>, base: RevealConfig, stagger_ms: f64) -> Vec<Card<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Card {
            item,
            reveal: RevealAttrs::new(base.staggered(index, stagger_ms)),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconView {
    pub name: &'static str,
    pub class: &'static str,
    pub glyph: &'static str,
}

impl From<IconHandle> for IconView {
    fn from(icon: IconHandle) -> Self {
        Self {
            name: icon.name(),
            class: icon.css_class(),
            glyph: icon.glyph(),
        }
    }
}

/// A CTA button ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaView {
    pub kind: &'static str,
    pub text: String,
    pub description: String,
    pub href: String,
    pub color: &'static str,
    pub style: &'static str,
    pub icon: IconView,
    pub urgency: String,
}

impl CtaView {
    pub fn new(cta: CtaDescriptor, base_url: &str) -> Self {
        Self {
            kind: cta.kind.as_str(),
            href: join_url(base_url, &cta.target_url),
            text: cta.text,
            description: cta.description,
            color: cta.color.as_str(),
            style: cta.visual_style.as_str(),
            icon: cta.icon.into(),
            urgency: cta.urgency_note,
        }
    }
}

/// Reveal attributes for the hero's staggered entrance.
#[derive(Debug, Clone, Serialize)]
pub struct HeroReveal {
    pub icon: RevealAttrs,
    pub title: RevealAttrs,
    pub subtitle: RevealAttrs,
    pub description: RevealAttrs,
    pub buttons: RevealAttrs,
}

impl Default for HeroReveal {
    fn default() -> Self {
        Self {
            icon: RevealAttrs::preset("hero-icon"),
            title: RevealAttrs::preset("hero-title"),
            subtitle: RevealAttrs::preset("hero-subtitle"),
            description: RevealAttrs::preset("hero-description"),
            buttons: RevealAttrs::preset("hero-buttons"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub page: String,
    pub headline: String,
    pub subheading: String,
    pub description: String,
    pub social_proof: String,
    pub urgency: String,
    pub primary: CtaView,
    pub secondary: CtaView,
    /// Page-specific copy such as section titles
    pub extras: BTreeMap<String, String>,
    pub reveal: HeroReveal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatView {
    pub label: String,
    pub value: String,
    pub trend: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrincipleView {
    pub icon: IconView,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferingView {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub details: String,
    pub color: &'static str,
    pub link: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyView {
    pub step: usize,
    pub name: String,
    pub emotion: String,
    pub goal: String,
    pub content: String,
    pub cta: CtaView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialView {
    pub name: String,
    pub role: String,
    pub text: String,
    pub rating: u8,
    pub stars: String,
}

/// Sections rendered below a page's hero. Unused sections stay empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Sections {
    pub value_propositions: Option<ValuePropositions>,
    pub stats: Vec<Card<StatView>>,
    pub principles: Vec<Card<PrincipleView>>,
    pub offerings: Vec<Card<OfferingView>>,
    pub journey: Vec<Card<JourneyView>>,
    pub testimonials: Vec<Card<TestimonialView>>,
    pub ctas: Vec<Card<CtaView>>,
}

/// Builds views from a resolver.
pub struct Views<'a> {
    resolver: &'a ContentResolver,
    base_url: &'a str,
    reveal: RevealConfig,
    stagger_ms: f64,
}

impl<'a> Views<'a> {
    pub fn new(
        resolver: &'a ContentResolver,
        base_url: &'a str,
        reveal: RevealConfig,
        stagger_ms: f64,
    ) -> Self {
        Self {
            resolver,
            base_url,
            reveal,
            stagger_ms,
        }
    }

    pub fn cta(&self, cta: CtaDescriptor) -> CtaView {
        CtaView::new(cta, self.base_url)
    }

    pub fn hero(&self, page: &str) -> HeroView {
        let bundle = self.resolver.resolve_page_content(page);

        HeroView {
            page: bundle.page,
            headline: bundle.headline,
            subheading: bundle.subheading,
            description: bundle.description,
            social_proof: bundle.social_proof_text,
            urgency: bundle.urgency_text,
            primary: self.cta(bundle.primary_cta),
            secondary: self.cta(bundle.secondary_cta),
            extras: bundle.extras,
            reveal: HeroReveal::default(),
        }
    }

    /// Sections shown on a built-in page.
    pub fn sections(&self, page: PageId) -> Sections {
        match page {
            PageId::Homepage => Sections {
                value_propositions: Some(self.resolver.value_propositions().clone()),
                stats: self.stats(),
                principles: self.principles(),
                offerings: self.offerings(),
                testimonials: self.testimonials(),
                ..Default::default()
            },
            PageId::About => Sections {
                journey: self.journey(),
                principles: self.principles(),
                stats: self.stats(),
                ..Default::default()
            },
            PageId::Teachings => Sections {
                offerings: self.offerings(),
                ..Default::default()
            },
            PageId::Contact => Sections {
                ctas: self.ctas(),
                ..Default::default()
            },
            PageId::Testimonials => Sections {
                testimonials: self.testimonials(),
                stats: self.stats(),
                ..Default::default()
            },
        }
    }

    fn stats(&self) -> Vec<Card<StatView>> {
        let stats = self.resolver.stats().into_iter().map(|s| StatView {
            label: s.label,
            value: s.value,
            trend: s.trend,
            color: s.color.as_str(),
        });
        cards(stats, self.reveal, self.stagger_ms)
    }

    fn principles(&self) -> Vec<Card<PrincipleView>> {
        let principles = self.resolver.principles().into_iter().map(|p| PrincipleView {
            icon: p.icon.into(),
            title: p.title,
            description: p.description,
            link: p.link.map(|href| join_url(self.base_url, &href)),
        });
        cards(principles, self.reveal, self.stagger_ms)
    }

    fn offerings(&self) -> Vec<Card<OfferingView>> {
        let offerings = self.resolver.offerings().into_iter().map(|o| OfferingView {
            badge: o.badge,
            title: o.title,
            description: o.description,
            price: o.price,
            duration: o.duration,
            details: o.details,
            color: o.color.as_str(),
            link: o.link.map(|href| join_url(self.base_url, &href)),
            features: o.features,
        });
        cards(offerings, self.reveal, self.stagger_ms)
    }

    fn journey(&self) -> Vec<Card<JourneyView>> {
        let stages = self
            .resolver
            .journey()
            .into_iter()
            .enumerate()
            .map(|(index, stage)| JourneyView {
                step: index + 1,
                name: stage.name,
                emotion: stage.emotion,
                goal: stage.goal,
                content: stage.content,
                cta: self.cta(stage.cta),
            });
        cards(stages, self.reveal, self.stagger_ms)
    }

    fn testimonials(&self) -> Vec<Card<TestimonialView>> {
        let testimonials = self
            .resolver
            .testimonials()
            .into_iter()
            .map(|t| TestimonialView {
                stars: "★".repeat(usize::from(t.rating)),
                name: t.name,
                role: t.role,
                text: t.text,
                rating: t.rating,
            });
        cards(testimonials, self.reveal, self.stagger_ms)
    }

    fn ctas(&self) -> Vec<Card<CtaView>> {
        let ctas = CtaKind::ALL
            .into_iter()
            .map(|kind| self.cta(self.resolver.resolve_cta(kind)));
        cards(ctas, self.reveal, self.stagger_ms)
    }
}
