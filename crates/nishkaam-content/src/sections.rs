//! Resolved page sections: statistics, principles, offerings, journey and
//! testimonials, with their icon, color and CTA keys already looked up.

use serde::Serialize;

use crate::colors::ColorScheme;
use crate::content::{Testimonial, ValuePropositions};
use crate::cta::CtaDescriptor;
use crate::icons::IconHandle;
use crate::resolver::ContentResolver;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStat {
    pub label: String,
    pub value: String,
    pub trend: String,
    pub color: ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPrinciple {
    pub icon: IconHandle,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOffering {
    pub badge: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub details: String,
    pub color: ColorScheme,
    pub link: Option<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedJourneyStage {
    pub name: String,
    pub emotion: String,
    pub goal: String,
    pub content: String,
    pub cta: CtaDescriptor,
}

impl ContentResolver {
    pub fn value_propositions(&self) -> &ValuePropositions {
        &self.content().value_propositions
    }

    pub fn stats(&self) -> Vec<ResolvedStat> {
        self.content()
            .stats
            .iter()
            .map(|stat| ResolvedStat {
                label: stat.label.clone(),
                value: stat.value.clone(),
                trend: stat.trend.clone(),
                color: self.color(&stat.color),
            })
            .collect()
    }

    pub fn principles(&self) -> Vec<ResolvedPrinciple> {
        self.content()
            .principles
            .iter()
            .map(|principle| ResolvedPrinciple {
                icon: self.icon(&principle.icon),
                title: principle.title.clone(),
                description: principle.description.clone(),
                link: principle.link.clone(),
            })
            .collect()
    }

    pub fn offerings(&self) -> Vec<ResolvedOffering> {
        self.content()
            .offerings
            .iter()
            .map(|offering| ResolvedOffering {
                badge: offering.badge.clone(),
                title: offering.title.clone(),
                description: offering.description.clone(),
                price: offering.price.clone(),
                duration: offering.duration.clone(),
                details: offering.details.clone(),
                color: self.color(&offering.color),
                link: offering.link.clone(),
                features: offering.features.clone(),
            })
            .collect()
    }

    /// Journey stages in order, each with its CTA resolved.
    pub fn journey(&self) -> Vec<ResolvedJourneyStage> {
        self.content()
            .journey
            .iter()
            .map(|stage| ResolvedJourneyStage {
                name: stage.name.clone(),
                emotion: stage.emotion.clone(),
                goal: stage.goal.clone(),
                content: stage.content.clone(),
                cta: self.resolve_cta_key(&stage.cta),
            })
            .collect()
    }

    /// Testimonials with ratings clamped to one through five stars.
    pub fn testimonials(&self) -> Vec<Testimonial> {
        self.content()
            .testimonials
            .iter()
            .map(|t| Testimonial {
                rating: t.rating.clamp(1, 5),
                ..t.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use crate::cta::CtaKind;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[test]
    fn resolves_stat_colors() {
        let stats = ContentResolver::builtin().stats();

        let colors: Vec<ColorScheme> = stats.iter().map(|s| s.color).collect();
        assert_eq!(
            colors,
            vec![
                ColorScheme::Orange,
                ColorScheme::Blue,
                ColorScheme::Green,
                ColorScheme::Yellow
            ]
        );
    }

    #[test]
    fn resolves_principle_icons_from_short_aliases() {
        let principles = ContentResolver::builtin().principles();

        let icons: Vec<IconHandle> = principles.iter().map(|p| p.icon).collect();
        assert_eq!(
            icons,
            vec![IconHandle::Om, IconHandle::Globe, IconHandle::Heart]
        );
    }

    #[test]
    fn journey_stages_resolve_their_ctas() {
        let journey = ContentResolver::builtin().journey();

        let kinds: Vec<CtaKind> = journey.iter().map(|s| s.cta.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CtaKind::Secondary,
                CtaKind::Primary,
                CtaKind::Primary,
                CtaKind::Emergency,
                CtaKind::Tertiary
            ]
        );
    }

    #[test]
    fn unknown_offering_color_is_yellow() {
        let content = SiteContent::from_toml_str(
            r#"
[[offerings]]
badge = "Retreat"
title = "Himalayan Retreat"
description = "Seven days of silence."
price = "Custom Quote"
color = "saffron"
"#,
        )
        .unwrap();

        let offerings = ContentResolver::new(Arc::new(content)).offerings();

        assert_eq!(offerings.len(), 1);
        assert_eq!(offerings[0].color, ColorScheme::Yellow);
        assert!(offerings[0].features.is_empty());
    }

    #[test]
    fn clamps_testimonial_ratings() {
        let content = SiteContent::from_toml_str(
            r#"
[[testimonials]]
name = "A."
text = "Too generous."
rating = 9

[[testimonials]]
name = "B."
text = "Too harsh."
rating = 0
"#,
        )
        .unwrap();

        let ratings: Vec<u8> = ContentResolver::new(Arc::new(content))
            .testimonials()
            .iter()
            .map(|t| t.rating)
            .collect();

        assert_eq!(ratings, vec![5, 1]);
    }
}
