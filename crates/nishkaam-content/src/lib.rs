//! Configuration-driven page content for the Vedic Wisdom Series site.
//!
//! Content lives in static tables ([`SiteContent`]) loaded once at startup.
//! [`ContentResolver`] turns a page identifier into a ready-to-render
//! [`ContentBundle`], resolving CTA kinds, icon keys and color keys on the
//! way. No lookup in this crate fails: unknown keys fall back to documented
//! defaults and are reported through [`Fallback`].

pub mod colors;
pub mod content;
pub mod cta;
pub mod icons;
pub mod page;
pub mod resolver;
pub mod sections;
pub mod validate;

pub use colors::{resolve_color, ColorScheme};
pub use content::{
    ContentError, JourneyStage, Offering, Principle, SiteContent, Stat, Testimonial,
    ValuePropositions,
};
pub use cta::{CtaDescriptor, CtaEntry, CtaKind, VisualStyle};
pub use icons::{lookup_icon, resolve_icon, IconHandle};
pub use page::{ContentBundle, HeroEntry, PageId};
pub use resolver::{ContentResolver, Fallback, FallbackHook, FALLBACK_PAGE};
pub use sections::{ResolvedJourneyStage, ResolvedOffering, ResolvedPrinciple, ResolvedStat};
pub use validate::ContentIssue;
