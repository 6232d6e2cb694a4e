//! Symbolic icon keys and the handles they resolve to.
//!
//! Content refers to icons by string key (`"FaBook"`, or the short series
//! aliases such as `"om"`). Lookup goes through one closed table, and
//! [`resolve_icon`] always produces a handle.

use serde::Serialize;

/// A concrete, renderable icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconHandle {
    Om,
    Book,
    GraduationCap,
    Heart,
    Globe,
    HandsHelping,
    Lightbulb,
    Users,
    Star,
    Phone,
    Envelope,
    CalendarCheck,
}

impl IconHandle {
    /// Handle used for any key that is not in the table.
    pub const DEFAULT: IconHandle = IconHandle::Om;

    /// Every handle, in table order.
    pub const ALL: [IconHandle; 12] = [
        IconHandle::Om,
        IconHandle::Book,
        IconHandle::GraduationCap,
        IconHandle::Heart,
        IconHandle::Globe,
        IconHandle::HandsHelping,
        IconHandle::Lightbulb,
        IconHandle::Users,
        IconHandle::Star,
        IconHandle::Phone,
        IconHandle::Envelope,
        IconHandle::CalendarCheck,
    ];

    /// Canonical symbolic name (`FaOm`, `FaBook`, ...).
    pub fn name(self) -> &'static str {
        match self {
            IconHandle::Om => "FaOm",
            IconHandle::Book => "FaBook",
            IconHandle::GraduationCap => "FaGraduationCap",
            IconHandle::Heart => "FaHeart",
            IconHandle::Globe => "FaGlobe",
            IconHandle::HandsHelping => "FaHandsHelping",
            IconHandle::Lightbulb => "FaLightbulb",
            IconHandle::Users => "FaUsers",
            IconHandle::Star => "FaStar",
            IconHandle::Phone => "FaPhone",
            IconHandle::Envelope => "FaEnvelope",
            IconHandle::CalendarCheck => "FaCalendarCheck",
        }
    }

    /// CSS class applied to the rendered icon.
    pub fn css_class(self) -> &'static str {
        match self {
            IconHandle::Om => "icon-om",
            IconHandle::Book => "icon-book",
            IconHandle::GraduationCap => "icon-graduation-cap",
            IconHandle::Heart => "icon-heart",
            IconHandle::Globe => "icon-globe",
            IconHandle::HandsHelping => "icon-hands-helping",
            IconHandle::Lightbulb => "icon-lightbulb",
            IconHandle::Users => "icon-users",
            IconHandle::Star => "icon-star",
            IconHandle::Phone => "icon-phone",
            IconHandle::Envelope => "icon-envelope",
            IconHandle::CalendarCheck => "icon-calendar-check",
        }
    }

    /// Text glyph drawn inside the icon slot.
    pub fn glyph(self) -> &'static str {
        match self {
            IconHandle::Om => "ॐ",
            IconHandle::Book => "📖",
            IconHandle::GraduationCap => "🎓",
            IconHandle::Heart => "♥",
            IconHandle::Globe => "🌐",
            IconHandle::HandsHelping => "🤝",
            IconHandle::Lightbulb => "💡",
            IconHandle::Users => "👥",
            IconHandle::Star => "★",
            IconHandle::Phone => "📞",
            IconHandle::Envelope => "✉",
            IconHandle::CalendarCheck => "📅",
        }
    }
}

impl std::fmt::Display for IconHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed key table. Both the `Fa*` names and the short aliases used by the
/// series data resolve here.
static ICON_TABLE: &[(&str, IconHandle)] = &[
    ("FaOm", IconHandle::Om),
    ("FaBook", IconHandle::Book),
    ("FaGraduationCap", IconHandle::GraduationCap),
    ("FaHeart", IconHandle::Heart),
    ("FaGlobe", IconHandle::Globe),
    ("FaHandsHelping", IconHandle::HandsHelping),
    ("FaLightbulb", IconHandle::Lightbulb),
    ("FaUsers", IconHandle::Users),
    ("FaStar", IconHandle::Star),
    ("FaPhone", IconHandle::Phone),
    ("FaEnvelope", IconHandle::Envelope),
    ("FaCalendarCheck", IconHandle::CalendarCheck),
    ("om", IconHandle::Om),
    ("globe", IconHandle::Globe),
    ("heart", IconHandle::Heart),
    ("book", IconHandle::Book),
    ("graduationCap", IconHandle::GraduationCap),
    ("handsHelping", IconHandle::HandsHelping),
];

/// Look up an icon key. Returns `None` for keys outside the table.
pub fn lookup_icon(key: &str) -> Option<IconHandle> {
    ICON_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, handle)| *handle)
}

/// Resolve an icon key, falling back to [`IconHandle::DEFAULT`].
pub fn resolve_icon(key: &str) -> IconHandle {
    lookup_icon(key).unwrap_or(IconHandle::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_fa_names() {
        assert_eq!(resolve_icon("FaBook"), IconHandle::Book);
        assert_eq!(resolve_icon("FaCalendarCheck"), IconHandle::CalendarCheck);
        assert_eq!(resolve_icon("FaPhone"), IconHandle::Phone);
    }

    #[test]
    fn resolves_short_aliases() {
        assert_eq!(resolve_icon("globe"), IconHandle::Globe);
        assert_eq!(resolve_icon("handsHelping"), IconHandle::HandsHelping);
    }

    #[test]
    fn unknown_keys_fall_back_to_default() {
        for key in ["", "FaRocket", "fabook", "OM", "  FaBook"] {
            assert_eq!(lookup_icon(key), None, "{key:?} should not be in the table");
            assert_eq!(resolve_icon(key), IconHandle::DEFAULT);
        }
    }

    #[test]
    fn every_handle_round_trips_through_its_name() {
        for handle in IconHandle::ALL {
            assert_eq!(resolve_icon(handle.name()), handle);
            assert!(handle.css_class().starts_with("icon-"));
            assert!(!handle.glyph().is_empty());
        }
    }
}
