//! Template engine for rendering site pages.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::site::{AuthorInfo, ContactInfo};
use crate::views::{HeroView, Sections};

/// A navigation item.
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    /// Display label
    pub label: String,
    /// URL path
    pub href: String,
    /// Whether this is the active page
    pub active: bool,
}

/// Search and social metadata for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    /// Absolute URL of the page
    pub canonical: String,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    /// Page heading
    pub title: String,
    pub seo: SeoMeta,
    pub site_name: String,
    /// Base URL, always ending in `/`
    pub base_url: String,
    pub nav: Vec<NavItem>,
    /// Links to markdown pages shown in the footer
    pub footer_links: Vec<NavItem>,
    pub contact: ContactInfo,
    pub author: AuthorInfo,
    /// Hero for built-in pages
    pub hero: Option<HeroView>,
    pub sections: Sections,
    /// Rendered markdown for document pages
    pub content: String,
    /// "Last updated" date for document pages
    pub updated: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", BASE_TEMPLATE),
    ("macros.html", MACROS_TEMPLATE),
    ("hero.html", HERO_TEMPLATE),
    ("page.html", PAGE_TEMPLATE),
    ("homepage.html", HOME_TEMPLATE),
    ("about.html", ABOUT_TEMPLATE),
    ("teachings.html", TEACHINGS_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
    ("testimonials.html", TESTIMONIALS_TEMPLATE),
    ("doc.html", DOC_TEMPLATE),
];

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("Failed to add template {}: {}", name, e));
        }

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            seo => &context.seo,
            site_name => &context.site_name,
            base_url => &context.base_url,
            nav => &context.nav,
            footer_links => &context.footer_links,
            contact => &context.contact,
            author => &context.author,
            hero => &context.hero,
            sections => &context.sections,
            content => &context.content,
            updated => &context.updated,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ seo.title }}</title>
  <meta name="description" content="{{ seo.description }}">
  <link rel="canonical" href="{{ seo.canonical }}">
  <meta property="og:type" content="website">
  <meta property="og:site_name" content="{{ site_name }}">
  <meta property="og:title" content="{{ seo.title }}">
  <meta property="og:description" content="{{ seo.description }}">
  <meta property="og:url" content="{{ seo.canonical }}">
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="{{ seo.title }}">
  <meta name="twitter:description" content="{{ seo.description }}">
  <link rel="stylesheet" href="{{ base_url }}assets/main.css">
  <noscript><style>.reveal { opacity: 1 !important; transform: none !important; }</style></noscript>
</head>
<body>
  <header class="site-header">
    <a href="{{ base_url }}" class="site-logo">{{ site_name }}</a>
    <nav class="site-nav">
      <ul>
      {% for item in nav %}
        <li class="nav-item{% if item.active %} active{% endif %}"><a href="{{ item.href }}">{{ item.label }}</a></li>
      {% endfor %}
      </ul>
    </nav>
  </header>
  <main class="main">
    {% block content %}{% endblock %}
  </main>
  <footer class="site-footer">
    <p class="footer-author">{{ author.name }}, {{ author.title }}</p>
    <p class="footer-contact"><a href="mailto:{{ contact.email }}">{{ contact.email }}</a>{% if contact.phone %} | {{ contact.phone }}{% endif %}</p>
    {% if footer_links %}
    <ul class="footer-links">
      {% for link in footer_links %}
      <li><a href="{{ link.href }}">{{ link.label }}</a></li>
      {% endfor %}
    </ul>
    {% endif %}
  </footer>
  <script src="{{ base_url }}assets/reveal.js" defer></script>
</body>
</html>"##;

const MACROS_TEMPLATE: &str = r##"{% macro reveal(attrs) %} data-reveal="{{ attrs.data }}" style="{{ attrs.style }}"{% endmacro %}

{% macro cta_button(cta) %}<a href="{{ cta.href }}" class="cta cta-{{ cta.style }} scheme-{{ cta.color }}" data-cta="{{ cta.kind }}" title="{{ cta.description }}"><span class="icon {{ cta.icon.class }}" aria-hidden="true">{{ cta.icon.glyph }}</span> {{ cta.text }}</a>{% endmacro %}"##;

const HERO_TEMPLATE: &str = r##"{% from "macros.html" import reveal, cta_button %}
<section class="hero" data-page="{{ hero.page }}">
  <div class="hero-icon reveal"{{ reveal(hero.reveal.icon) }}><span class="icon icon-om" aria-hidden="true">ॐ</span></div>
  <h1 class="hero-headline reveal"{{ reveal(hero.reveal.title) }}>{{ hero.headline }}</h1>
  <p class="hero-subheading reveal"{{ reveal(hero.reveal.subtitle) }}>{{ hero.subheading }}</p>
  <p class="hero-description reveal"{{ reveal(hero.reveal.description) }}>{{ hero.description }}</p>
  <div class="hero-buttons reveal"{{ reveal(hero.reveal.buttons) }}>
    {{ cta_button(hero.primary) }}
    {{ cta_button(hero.secondary) }}
  </div>
  {% if hero.social_proof %}<p class="hero-social-proof">{{ hero.social_proof }}</p>{% endif %}
  {% if hero.urgency %}<p class="hero-urgency">{{ hero.urgency }}</p>{% endif %}
</section>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}
{% block sections %}{% endblock %}
{% endblock %}"##;

const HOME_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block sections %}
{% from "macros.html" import reveal %}
{% if sections.value_propositions %}
<section class="section value-propositions">
  <h2>{{ sections.value_propositions.tertiary }}</h2>
  <p>{{ sections.value_propositions.support }}</p>
</section>
{% endif %}

<section class="section stats">
  {% for stat in sections.stats %}
  <div class="stat reveal scheme-{{ stat.color }}"{{ reveal(stat.reveal) }}>
    <span class="stat-value">{{ stat.value }}</span>
    <span class="stat-label">{{ stat.label }}</span>
    {% if stat.trend %}<span class="stat-trend">{{ stat.trend }}</span>{% endif %}
  </div>
  {% endfor %}
</section>

<section class="section principles">
  {% for principle in sections.principles %}
  <article class="principle reveal"{{ reveal(principle.reveal) }}>
    <span class="icon {{ principle.icon.class }}" aria-hidden="true">{{ principle.icon.glyph }}</span>
    <h3>{{ principle.title }}</h3>
    <p>{{ principle.description }}</p>
    {% if principle.link %}<a href="{{ principle.link }}">Learn more</a>{% endif %}
  </article>
  {% endfor %}
</section>

<section class="section offerings">
  {% for offering in sections.offerings %}
  <article class="offering reveal scheme-{{ offering.color }}"{{ reveal(offering.reveal) }}>
    <span class="badge">{{ offering.badge }}</span>
    <h3>{{ offering.title }}</h3>
    <p>{{ offering.description }}</p>
    {% if offering.link %}<a href="{{ offering.link }}">Explore</a>{% endif %}
  </article>
  {% endfor %}
</section>

<section class="section testimonials">
  {% for testimonial in sections.testimonials %}
  <blockquote class="testimonial reveal"{{ reveal(testimonial.reveal) }}>
    <p>{{ testimonial.text }}</p>
    <footer><span class="stars" aria-label="{{ testimonial.rating }} stars">{{ testimonial.stars }}</span> {{ testimonial.name }}{% if testimonial.role %}, {{ testimonial.role }}{% endif %}</footer>
  </blockquote>
  {% endfor %}
</section>
{% endblock %}"##;

const ABOUT_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block sections %}
{% from "macros.html" import reveal, cta_button %}
<section class="section journey">
  {% if hero.extras.journey_title %}<h2>{{ hero.extras.journey_title }}</h2>{% endif %}
  {% if hero.extras.journey_description %}<p>{{ hero.extras.journey_description }}</p>{% endif %}
  <ol class="journey-stages">
    {% for stage in sections.journey %}
    <li class="journey-stage reveal"{{ reveal(stage.reveal) }}>
      <span class="journey-step">{{ stage.step }}</span>
      <h3>{{ stage.name }}</h3>
      <p class="journey-goal">{{ stage.goal }}</p>
      <p>{{ stage.content }}</p>
      {{ cta_button(stage.cta) }}
    </li>
    {% endfor %}
  </ol>
</section>

<section class="section credentials">
  {% if hero.extras.credentials_title %}<h2>{{ hero.extras.credentials_title }}</h2>{% endif %}
  {% if hero.extras.credentials_headline %}<p>{{ hero.extras.credentials_headline }}</p>{% endif %}
  {% for stat in sections.stats %}
  <div class="stat reveal scheme-{{ stat.color }}"{{ reveal(stat.reveal) }}>
    <span class="stat-value">{{ stat.value }}</span>
    <span class="stat-label">{{ stat.label }}</span>
  </div>
  {% endfor %}
</section>

<section class="section philosophy">
  {% if hero.extras.philosophy_badge %}<span class="badge">{{ hero.extras.philosophy_badge }}</span>{% endif %}
  {% if hero.extras.philosophy_title %}<h2>{{ hero.extras.philosophy_title }}</h2>{% endif %}
  {% if hero.extras.philosophy_description %}<p>{{ hero.extras.philosophy_description }}</p>{% endif %}
  {% for principle in sections.principles %}
  <article class="principle reveal"{{ reveal(principle.reveal) }}>
    <span class="icon {{ principle.icon.class }}" aria-hidden="true">{{ principle.icon.glyph }}</span>
    <h3>{{ principle.title }}</h3>
    <p>{{ principle.description }}</p>
  </article>
  {% endfor %}
</section>
{% endblock %}"##;

const TEACHINGS_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block sections %}
{% from "macros.html" import reveal %}
<section class="section programs">
  {% if hero.extras.programs_title %}<h2>{{ hero.extras.programs_title }}</h2>{% endif %}
  {% if hero.extras.programs_description %}<p>{{ hero.extras.programs_description }}</p>{% endif %}
  {% for offering in sections.offerings %}
  <article class="offering reveal scheme-{{ offering.color }}"{{ reveal(offering.reveal) }}>
    <span class="badge">{{ offering.badge }}</span>
    <h3>{{ offering.title }}</h3>
    <p>{{ offering.description }}</p>
    <dl class="offering-meta">
      {% if offering.price %}<dt>Investment</dt><dd>{{ offering.price }}</dd>{% endif %}
      {% if offering.duration %}<dt>Duration</dt><dd>{{ offering.duration }}</dd>{% endif %}
      {% if offering.details %}<dt>Format</dt><dd>{{ offering.details }}</dd>{% endif %}
    </dl>
    {% if offering.features %}
    <ul class="offering-features">
      {% for feature in offering.features %}<li>{{ feature }}</li>{% endfor %}
    </ul>
    {% endif %}
    {% if offering.link %}<a href="{{ offering.link }}" class="cta cta-outline scheme-{{ offering.color }}">Learn more</a>{% endif %}
  </article>
  {% endfor %}
</section>
{% endblock %}"##;

const CONTACT_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block sections %}
{% from "macros.html" import reveal, cta_button %}
<section class="section consultation">
  {% if hero.extras.consultation_title %}<h2>{{ hero.extras.consultation_title }}</h2>{% endif %}
  {% if hero.extras.consultation_description %}<p>{{ hero.extras.consultation_description }}</p>{% endif %}
  <div class="cta-grid">
    {% for cta in sections.ctas %}
    <div class="cta-card reveal"{{ reveal(cta.reveal) }}>
      <p class="cta-description">{{ cta.description }}</p>
      {{ cta_button(cta) }}
      {% if cta.urgency %}<p class="cta-urgency">{{ cta.urgency }}</p>{% endif %}
    </div>
    {% endfor %}
  </div>
  <p class="contact-direct">Email <a href="mailto:{{ contact.email }}">{{ contact.email }}</a>{% if contact.phone %} or call {{ contact.phone }}{% endif %}</p>
</section>
{% endblock %}"##;

const TESTIMONIALS_TEMPLATE: &str = r##"{% extends "page.html" %}

{% block sections %}
{% from "macros.html" import reveal %}
<section class="section stories">
  {% if hero.extras.stories_title %}<h2>{{ hero.extras.stories_title }}</h2>{% endif %}
  {% if hero.extras.stories_description %}<p>{{ hero.extras.stories_description }}</p>{% endif %}
  {% for testimonial in sections.testimonials %}
  <blockquote class="testimonial reveal"{{ reveal(testimonial.reveal) }}>
    <p>{{ testimonial.text }}</p>
    <footer><span class="stars" aria-label="{{ testimonial.rating }} stars">{{ testimonial.stars }}</span> {{ testimonial.name }}{% if testimonial.role %}, {{ testimonial.role }}{% endif %}</footer>
  </blockquote>
  {% endfor %}
</section>

<section class="section stats">
  {% for stat in sections.stats %}
  <div class="stat reveal scheme-{{ stat.color }}"{{ reveal(stat.reveal) }}>
    <span class="stat-value">{{ stat.value }}</span>
    <span class="stat-label">{{ stat.label }}</span>
  </div>
  {% endfor %}
</section>
{% endblock %}"##;

const DOC_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="doc">
  <h1>{{ title }}</h1>
  {% if updated %}<p class="doc-updated">Last updated: {{ updated }}</p>{% endif %}
  <div class="content">
    {{ content | safe }}
  </div>
</article>
{% endblock %}"##;
