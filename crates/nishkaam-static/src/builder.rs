//! Static site builder.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use nishkaam_content::{ContentResolver, PageId};
use nishkaam_reveal::RevealConfig;

use crate::assets::AssetPipeline;
use crate::frontmatter::{extract_frontmatter, Frontmatter};
use crate::site::{default_nav, join_url, AuthorInfo, ContactInfo, NavLink, ThemeColors};
use crate::templates::{Context, NavItem, SeoMeta, TemplateEngine};
use crate::views::{Sections, Views};

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Markdown pages directory (privacy policy, terms, ...)
    pub pages_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL the site is served under
    pub base_url: String,

    /// Absolute site origin, used for canonical URLs and the sitemap
    pub site_url: String,

    pub site_name: String,

    /// Fallback meta description for pages without their own
    pub site_description: String,

    pub theme: ThemeColors,

    /// Main navigation links
    pub nav: Vec<NavLink>,

    pub contact: ContactInfo,

    pub author: AuthorInfo,

    /// Reveal animation for section cards
    pub reveal: RevealConfig,

    /// Extra delay per card within a section, in milliseconds
    pub stagger_ms: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("pages"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            site_url: "https://vedicwisdomseries.com".to_string(),
            site_name: "Vedic Wisdom Series".to_string(),
            site_description:
                "Authentic Vedic education bridging ancient wisdom and modern understanding."
                    .to_string(),
            theme: ThemeColors::default(),
            nav: default_nav(),
            contact: ContactInfo::default(),
            author: AuthorInfo::default(),
            reveal: RevealConfig::default(),
            stagger_ms: 150.0,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated, documents included
    pub pages: usize,

    /// Number of markdown documents rendered
    pub documents: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read pages: {0}")]
    ReadError(String),

    #[error("Failed to parse page: {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A markdown document to be built.
#[derive(Debug)]
struct Document {
    /// Source file path
    source_path: PathBuf,

    /// URL slug without surrounding slashes
    slug: String,

    frontmatter: Frontmatter,

    /// Markdown after the frontmatter block
    markdown: String,
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    resolver: ContentResolver,
    templates: TemplateEngine,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: BuildConfig, resolver: ContentResolver) -> Self {
        Self {
            config,
            resolver,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let documents = self.discover_documents()?;
        let footer_links = self.footer_links(&documents);

        // Render built-in pages and documents in parallel
        let builtin: Vec<Result<(), BuildError>> = PageId::ALL
            .par_iter()
            .map(|page| self.build_builtin_page(*page, &footer_links))
            .collect();

        let rendered: Vec<Result<(), BuildError>> = documents
            .par_iter()
            .map(|doc| self.build_document(doc, &footer_links))
            .collect();

        for result in builtin.into_iter().chain(rendered) {
            result?;
        }

        self.generate_assets()?;
        self.generate_sitemap(&documents)?;

        let duration = start.elapsed();
        tracing::debug!(
            "Rendered {} built-in pages and {} documents",
            PageId::ALL.len(),
            documents.len()
        );

        Ok(BuildResult {
            pages: PageId::ALL.len() + documents.len(),
            documents: documents.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Base URL with a guaranteed trailing slash.
    fn base_url(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }

    fn page_url(&self, slug: &str) -> String {
        if slug.is_empty() {
            self.base_url()
        } else {
            format!("{}{}/", self.base_url(), slug)
        }
    }

    fn canonical_url(&self, slug: &str) -> String {
        let origin = self.config.site_url.trim_end_matches('/');
        if slug.is_empty() {
            format!("{}/", origin)
        } else {
            format!("{}/{}/", origin, slug)
        }
    }

    fn output_path(&self, slug: &str) -> PathBuf {
        if slug.is_empty() {
            self.config.output_dir.join("index.html")
        } else {
            self.config.output_dir.join(slug).join("index.html")
        }
    }

    /// Discover markdown documents. A missing pages directory means none.
    fn discover_documents(&self) -> Result<Vec<Document>, BuildError> {
        let mut documents = Vec::new();

        if !self.config.pages_dir.exists() {
            tracing::debug!(
                "Pages directory not found, skipping documents: {}",
                self.config.pages_dir.display()
            );
            return Ok(documents);
        }

        let reserved: HashSet<&str> = PageId::ALL.iter().map(|p| p.slug()).collect();
        let mut seen: HashSet<String> = HashSet::new();

        for entry in WalkDir::new(&self.config.pages_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }

            let source = fs::read_to_string(path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;

            let (frontmatter, markdown) =
                extract_frontmatter(&source).map_err(|e| BuildError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            let relative = path.strip_prefix(&self.config.pages_dir).unwrap_or(path);
            let frontmatter = frontmatter.unwrap_or_else(|| Frontmatter {
                title: title_from_path(relative),
                ..Default::default()
            });
            let slug = match &frontmatter.slug {
                Some(slug) => slug.trim_matches('/').to_string(),
                None => slug_from_path(relative),
            };

            if !is_relative_slug(&slug) {
                return Err(BuildError::ParseError {
                    path: path.display().to_string(),
                    message: format!("slug '{}' must stay inside the output directory", slug),
                });
            }

            if reserved.contains(slug.as_str()) || !seen.insert(slug.clone()) {
                return Err(BuildError::ParseError {
                    path: path.display().to_string(),
                    message: format!("slug '{}' is already taken", slug),
                });
            }

            documents.push(Document {
                source_path: path.to_path_buf(),
                slug,
                markdown: markdown.to_string(),
                frontmatter,
            });
        }

        // Sort by order from frontmatter
        documents.sort_by(|a, b| {
            let order_a = a.frontmatter.order.unwrap_or(999);
            let order_b = b.frontmatter.order.unwrap_or(999);
            order_a.cmp(&order_b).then_with(|| a.slug.cmp(&b.slug))
        });

        Ok(documents)
    }

    fn footer_links(&self, documents: &[Document]) -> Vec<NavItem> {
        documents
            .iter()
            .filter(|doc| doc.frontmatter.nav)
            .map(|doc| NavItem {
                label: doc.frontmatter.title.clone(),
                href: self.page_url(&doc.slug),
                active: false,
            })
            .collect()
    }

    /// Main navigation with the link for `slug` marked active.
    fn navigation(&self, slug: &str) -> Vec<NavItem> {
        let base_url = self.base_url();
        self.config
            .nav
            .iter()
            .map(|link| NavItem {
                label: link.label.clone(),
                href: join_url(&base_url, &link.href),
                active: link.href.trim_matches('/') == slug,
            })
            .collect()
    }

    fn context(&self, slug: &str, title: String, seo: SeoMeta, footer_links: &[NavItem]) -> Context {
        Context {
            title,
            seo,
            site_name: self.config.site_name.clone(),
            base_url: self.base_url(),
            nav: self.navigation(slug),
            footer_links: footer_links.to_vec(),
            contact: self.config.contact.clone(),
            author: self.config.author.clone(),
            hero: None,
            sections: Sections::default(),
            content: String::new(),
            updated: None,
        }
    }

    fn build_builtin_page(&self, page: PageId, footer_links: &[NavItem]) -> Result<(), BuildError> {
        let base_url = self.base_url();
        let views = Views::new(
            &self.resolver,
            &base_url,
            self.config.reveal,
            self.config.stagger_ms,
        );
        let hero = views.hero(page.as_str());
        let slug = page.slug();

        let title = match page {
            PageId::Homepage => self.config.site_name.clone(),
            _ => capitalize(page.as_str()),
        };
        let seo = SeoMeta {
            title: match page {
                PageId::Homepage => format!("{} | {}", self.config.site_name, hero.subheading),
                _ => format!("{} | {}", title, self.config.site_name),
            },
            description: hero.description.clone(),
            canonical: self.canonical_url(slug),
        };

        let context = Context {
            sections: views.sections(page),
            hero: Some(hero),
            ..self.context(slug, title, seo, footer_links)
        };

        let template = format!("{}.html", page.as_str());
        self.render_to(&template, &context, &self.output_path(slug))
    }

    fn build_document(&self, doc: &Document, footer_links: &[NavItem]) -> Result<(), BuildError> {
        let fm = &doc.frontmatter;
        let seo = SeoMeta {
            title: format!("{} | {}", fm.title, self.config.site_name),
            description: fm
                .description
                .clone()
                .unwrap_or_else(|| self.config.site_description.clone()),
            canonical: self.canonical_url(&doc.slug),
        };

        let context = Context {
            content: render_markdown(&doc.markdown),
            updated: fm.updated.clone(),
            ..self.context(&doc.slug, fm.title.clone(), seo, footer_links)
        };

        tracing::debug!("Rendering {}", doc.source_path.display());
        self.render_to("doc.html", &context, &self.output_path(&doc.slug))
    }

    fn render_to(&self, template: &str, context: &Context, output_path: &Path) -> Result<(), BuildError> {
        let html = self
            .templates
            .render_page(template, context)
            .map_err(|e| BuildError::TemplateError(format!("{}: {}", template, e)))?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css(&self.config.theme);
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Skipping CSS minification: {}", e);
                css
            })
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join("reveal.js"), AssetPipeline::generate_js())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self, documents: &[Document]) -> Result<(), BuildError> {
        let slugs = PageId::ALL
            .iter()
            .map(|page| page.slug())
            .chain(documents.iter().map(|doc| doc.slug.as_str()));

        let urls: Vec<String> = slugs
            .map(|slug| {
                format!(
                    "  <url>\n    <loc>{}</loc>\n  </url>",
                    escape_xml(&self.canonical_url(slug))
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
            self.config.site_url.trim_end_matches('/')
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

/// Render markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Slugs are joined onto the output directory, so only plain names are allowed.
fn is_relative_slug(slug: &str) -> bool {
    Path::new(slug)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// `legal/privacy-policy.md` -> `legal/privacy-policy`
fn slug_from_path(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// `privacy-policy.md` -> `Privacy policy`
fn title_from_path(relative: &Path) -> String {
    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled");
    capitalize(&stem.replace(['-', '_'], " "))
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
