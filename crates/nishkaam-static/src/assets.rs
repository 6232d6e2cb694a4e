//! Asset pipeline for the stylesheet and the reveal runtime.

use nishkaam_content::ColorScheme;

use crate::site::ThemeColors;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file: theme variables, one class per color
    /// scheme, then the base layout.
    pub fn generate_css(theme: &ThemeColors) -> String {
        let mut css = format!(
            ":root {{\n  --primary: {};\n  --secondary: {};\n  --tertiary: {};\n  --background: {};\n  --foreground: {};\n}}\n\n",
            theme.primary, theme.secondary, theme.tertiary, theme.background, theme.foreground
        );

        for scheme in ColorScheme::ALL {
            css.push_str(&format!(
                ".scheme-{} {{\n  --scheme-color: {};\n}}\n\n",
                scheme.as_str(),
                scheme.hex()
            ));
        }

        css.push_str(BASE_CSS);
        css
    }

    /// Generate the reveal runtime.
    pub fn generate_js() -> String {
        REVEAL_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const BASE_CSS: &str = r#"/* Layout tokens */
:root {
  --content-max-width: 1100px;
  --radius: 0.5rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

/* Header and navigation */
.site-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  border-bottom: 1px solid rgba(0, 0, 0, 0.08);
}

.site-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary);
  text-decoration: none;
}

.site-nav ul {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-item a {
  color: var(--foreground);
  text-decoration: none;
}

.nav-item.active > a,
.nav-item a:hover {
  color: var(--primary);
}

/* Hero */
.hero {
  text-align: center;
  padding: 6rem 2rem 4rem;
  background: linear-gradient(180deg, rgba(255, 153, 51, 0.08), transparent);
}

.hero-icon {
  font-size: 3rem;
  color: var(--tertiary);
}

.hero-headline {
  font-size: 3rem;
  font-weight: 800;
  margin: 1rem auto;
  max-width: 900px;
}

.hero-subheading {
  font-size: 1.5rem;
  color: var(--secondary);
  margin-bottom: 1rem;
}

.hero-description {
  max-width: 700px;
  margin: 0 auto 2rem;
}

.hero-buttons {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
}

.hero-social-proof,
.hero-urgency {
  margin-top: 1.5rem;
  font-size: 0.875rem;
}

.hero-urgency {
  color: #FF6B6B;
}

/* Call-to-action buttons */
.cta {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: var(--radius);
  font-weight: 600;
  text-decoration: none;
  transition: transform 0.15s, box-shadow 0.15s;
}

.cta:hover {
  transform: translateY(-2px);
  box-shadow: 0 8px 20px rgba(0, 0, 0, 0.12);
}

.cta-solid {
  background: var(--scheme-color);
  color: #ffffff;
}

.cta-outline {
  border: 2px solid var(--scheme-color);
  color: var(--scheme-color);
}

.cta-ghost {
  color: var(--scheme-color);
}

/* Sections */
.section {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 4rem 2rem;
}

.section h2 {
  font-size: 2rem;
  margin-bottom: 1rem;
  text-align: center;
}

.stats,
.principles,
.offerings,
.programs,
.cta-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1.5rem;
}

.stat {
  text-align: center;
  border-top: 4px solid var(--scheme-color);
  padding: 1.5rem;
}

.stat-value {
  display: block;
  font-size: 2.5rem;
  font-weight: 800;
  color: var(--scheme-color);
}

.principle,
.offering,
.cta-card,
.testimonial {
  padding: 1.5rem;
  border-radius: var(--radius);
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
}

.offering {
  border-top: 4px solid var(--scheme-color);
}

.badge {
  display: inline-block;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--primary);
}

.journey-stages {
  list-style: none;
  display: grid;
  gap: 1.5rem;
}

.journey-step {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: var(--primary);
  color: #ffffff;
}

.stars {
  color: var(--tertiary);
}

/* Reveal targets */
.reveal {
  will-change: transform, opacity;
}

/* Document pages */
.doc {
  max-width: 800px;
  margin: 0 auto;
  padding: 3rem 2rem;
}

.doc h1 {
  font-size: 2.5rem;
  margin-bottom: 0.5rem;
}

.doc-updated {
  color: rgba(0, 0, 0, 0.55);
  margin-bottom: 2rem;
}

.content h2 {
  margin: 2rem 0 1rem;
}

.content p,
.content ul {
  margin-bottom: 1rem;
}

.content ul {
  padding-left: 1.5rem;
}

.content a {
  color: var(--primary);
}

/* Footer */
.site-footer {
  text-align: center;
  padding: 3rem 2rem;
  border-top: 1px solid rgba(0, 0, 0, 0.08);
  font-size: 0.875rem;
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: 1rem;
  list-style: none;
  margin-top: 1rem;
}

/* Responsive */
@media (max-width: 768px) {
  .site-header {
    flex-direction: column;
    gap: 1rem;
  }

  .hero-headline {
    font-size: 2rem;
  }
}
"#;

// Mirrors the controller state machine: hidden until the visible fraction
// reaches the threshold, then latched when `once` is set. Without
// IntersectionObserver every element is shown immediately.
const REVEAL_JS: &str = r#"(function () {
  'use strict';

  var elements = Array.prototype.slice.call(document.querySelectorAll('[data-reveal]'));
  if (elements.length === 0) return;

  function show(el) {
    el.style.transform = 'translate(0)';
    el.style.opacity = '1';
  }

  function hide(el) {
    el.style.transform = el.getAttribute('data-hidden-transform') || '';
    el.style.opacity = '0';
  }

  if (!('IntersectionObserver' in window)) {
    elements.forEach(show);
    return;
  }

  elements.forEach(function (el) {
    var config;
    try {
      config = JSON.parse(el.getAttribute('data-reveal'));
    } catch (err) {
      show(el);
      return;
    }

    var threshold = typeof config.threshold === 'number' ? config.threshold : 0.1;
    var once = config.once !== false;
    var phase = 'hidden';
    el.setAttribute('data-hidden-transform', el.style.transform);

    var observer = new IntersectionObserver(function (entries) {
      entries.forEach(function (entry) {
        if (phase === 'revealed') return;

        var ratio = entry.intersectionRatio;
        var inView = ratio > 0 && ratio >= threshold;

        if (inView) {
          phase = once ? 'revealed' : 'visible';
          show(el);
          if (once) observer.disconnect();
        } else if (!once && phase === 'visible') {
          phase = 'hidden';
          hide(el);
        }
      });
    }, { threshold: [0, threshold] });

    observer.observe(el);
  });
})();
"#;
