//! Color scheme keys used by CTAs, statistics and offerings.

use serde::Serialize;

/// A named color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Orange,
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
}

impl ColorScheme {
    /// Scheme used for unrecognized keys.
    pub const DEFAULT: ColorScheme = ColorScheme::Yellow;

    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Orange,
        ColorScheme::Blue,
        ColorScheme::Green,
        ColorScheme::Purple,
        ColorScheme::Red,
        ColorScheme::Yellow,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "orange" => Some(ColorScheme::Orange),
            "blue" => Some(ColorScheme::Blue),
            "green" => Some(ColorScheme::Green),
            "purple" => Some(ColorScheme::Purple),
            "red" => Some(ColorScheme::Red),
            "yellow" => Some(ColorScheme::Yellow),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Orange => "orange",
            ColorScheme::Blue => "blue",
            ColorScheme::Green => "green",
            ColorScheme::Purple => "purple",
            ColorScheme::Red => "red",
            ColorScheme::Yellow => "yellow",
        }
    }

    /// Swatch used when the scheme is rendered to CSS.
    ///
    /// Orange, blue and yellow are the saffron, serene blue and sacred gold
    /// brand colors; red is the soft urgency red.
    pub fn hex(self) -> &'static str {
        match self {
            ColorScheme::Orange => "#FF9933",
            ColorScheme::Blue => "#1E90FF",
            ColorScheme::Green => "#38A169",
            ColorScheme::Purple => "#805AD5",
            ColorScheme::Red => "#FF6B6B",
            ColorScheme::Yellow => "#F2DB49",
        }
    }
}

/// Resolve a color key, falling back to [`ColorScheme::DEFAULT`].
pub fn resolve_color(key: &str) -> ColorScheme {
    ColorScheme::parse(key).unwrap_or(ColorScheme::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_schemes() {
        assert_eq!(resolve_color("orange"), ColorScheme::Orange);
        assert_eq!(resolve_color("red"), ColorScheme::Red);
        assert_eq!(resolve_color("purple").as_str(), "purple");
    }

    #[test]
    fn every_scheme_parses_from_its_name() {
        for scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::parse(scheme.as_str()), Some(scheme));
            assert!(scheme.hex().starts_with('#'));
        }
    }

    #[test]
    fn unknown_scheme_is_yellow() {
        assert_eq!(resolve_color("teal"), ColorScheme::Yellow);
        assert_eq!(resolve_color(""), ColorScheme::Yellow);
        assert_eq!(resolve_color("Orange"), ColorScheme::Yellow);
    }
}
