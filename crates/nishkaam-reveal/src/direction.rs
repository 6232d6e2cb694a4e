//! Slide-in directions.

use serde::{Deserialize, Serialize};

use crate::style::format_number;

/// Edge an element slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideDirection {
    FromTop,
    #[default]
    FromBottom,
    FromLeft,
    FromRight,
}

impl SlideDirection {
    pub const ALL: [SlideDirection; 4] = [
        SlideDirection::FromTop,
        SlideDirection::FromBottom,
        SlideDirection::FromLeft,
        SlideDirection::FromRight,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "from-top" => Some(SlideDirection::FromTop),
            "from-bottom" => Some(SlideDirection::FromBottom),
            "from-left" => Some(SlideDirection::FromLeft),
            "from-right" => Some(SlideDirection::FromRight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlideDirection::FromTop => "from-top",
            SlideDirection::FromBottom => "from-bottom",
            SlideDirection::FromLeft => "from-left",
            SlideDirection::FromRight => "from-right",
        }
    }

    /// Transform for the hidden state: the element sits `distance` pixels
    /// back along the axis it slides in on.
    pub fn hidden_transform(self, distance: f64) -> String {
        let d = format_number(distance);
        match self {
            SlideDirection::FromBottom => format!("translateY({d}px)"),
            SlideDirection::FromTop => format!("translateY(-{d}px)"),
            SlideDirection::FromLeft => format!("translateX(-{d}px)"),
            SlideDirection::FromRight => format!("translateX({d}px)"),
        }
    }
}
