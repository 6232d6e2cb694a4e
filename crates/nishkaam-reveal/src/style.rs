//! Derived reveal styles and the transition easing.

use serde::Serialize;

use crate::config::RevealConfig;

/// Transform applied once the element is in place.
pub const VISIBLE_TRANSFORM: &str = "translate(0)";

/// A cubic Bézier timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl std::fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            format_number(self.x1),
            format_number(self.y1),
            format_number(self.x2),
            format_number(self.y2)
        )
    }
}

/// Ease-out curve used by every reveal transition.
pub const REVEAL_EASING: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

/// Inline style for one element: offset, opacity and transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealStyle {
    pub transform: String,
    pub opacity: f64,
    pub transition: String,
}

impl RevealStyle {
    /// Style for an element that is in place.
    pub fn visible(config: &RevealConfig) -> Self {
        Self {
            transform: VISIBLE_TRANSFORM.to_string(),
            opacity: 1.0,
            transition: transition(config),
        }
    }

    /// Style for an element waiting to enter view.
    pub fn hidden(config: &RevealConfig) -> Self {
        Self {
            transform: config.direction.hidden_transform(config.distance),
            opacity: 0.0,
            transition: transition(config),
        }
    }

    /// Render as the body of an inline `style` attribute.
    pub fn to_css(&self) -> String {
        format!(
            "transform: {}; opacity: {}; transition: {}",
            self.transform,
            format_number(self.opacity),
            self.transition
        )
    }
}

fn transition(config: &RevealConfig) -> String {
    format!(
        "all {}ms {} {}ms",
        format_number(config.duration_ms),
        REVEAL_EASING,
        format_number(config.delay_ms)
    )
}

/// Format a CSS number without a trailing `.0`.
pub(crate) fn format_number(value: f64) -> String {
    // -0.0 would print as "-0"
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::SlideDirection;
    use pretty_assertions::assert_eq;

    #[test]
    fn easing_renders_as_css() {
        assert_eq!(REVEAL_EASING.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn transition_is_the_same_in_both_states() {
        let config = RevealConfig::new(SlideDirection::FromLeft)
            .duration(600.0)
            .delay(200.0);

        let expected = "all 600ms cubic-bezier(0.4, 0, 0.2, 1) 200ms";
        assert_eq!(RevealStyle::hidden(&config).transition, expected);
        assert_eq!(RevealStyle::visible(&config).transition, expected);
    }

    #[test]
    fn renders_inline_css() {
        let style = RevealStyle::hidden(&RevealConfig::default());

        assert_eq!(
            style.to_css(),
            "transform: translateY(50px); opacity: 0; transition: all 800ms cubic-bezier(0.4, 0, 0.2, 1) 0ms"
        );
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(format_number(800.0), "800");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-0.0), "0");
    }
}
