//! Static site generator for the Vedic Wisdom Series site.
//!
//! Renders one page per [`nishkaam_content::PageId`] from resolved content,
//! plus markdown documents (privacy policy, terms) with YAML frontmatter.
//! Animated elements ship hidden with their reveal config attached, and a
//! small runtime reveals them as they scroll into view.

pub mod assets;
pub mod builder;
pub mod frontmatter;
pub mod site;
pub mod templates;
pub mod views;

pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use site::{AuthorInfo, ContactInfo, NavLink, ThemeColors};
