//! Reveal configuration and named presets.

use serde::{Deserialize, Serialize};

use crate::direction::SlideDirection;

const DEFAULT_DURATION_MS: f64 = 800.0;
const DEFAULT_DELAY_MS: f64 = 0.0;
const DEFAULT_DISTANCE: f64 = 50.0;
const DEFAULT_THRESHOLD: f64 = 0.1;

/// Configuration for one element's entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub direction: SlideDirection,
    /// Transition duration in milliseconds
    pub duration_ms: f64,
    /// Transition delay in milliseconds. Purely visual; it does not delay
    /// the state change.
    pub delay_ms: f64,
    /// Offset of the hidden state, in pixels
    pub distance: f64,
    /// Visible fraction (0 to 1) at which the element counts as in view
    pub threshold: f64,
    /// Latch the element visible after it first enters view
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            direction: SlideDirection::default(),
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: DEFAULT_DELAY_MS,
            distance: DEFAULT_DISTANCE,
            threshold: DEFAULT_THRESHOLD,
            once: true,
        }
    }
}

/// Preset names accepted by [`RevealConfig::preset`].
pub const PRESETS: &[&str] = &[
    "from-bottom",
    "from-left",
    "from-right",
    "from-top",
    "fast-from-bottom",
    "fast-from-left",
    "fast-from-right",
    "slow-from-bottom",
    "staggered-1",
    "staggered-2",
    "staggered-3",
    "staggered-4",
    "hero-icon",
    "hero-title",
    "hero-subtitle",
    "hero-description",
    "hero-buttons",
];

impl RevealConfig {
    pub fn new(direction: SlideDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn distance(mut self, px: f64) -> Self {
        self.distance = px;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Clamp every field into its valid range.
    ///
    /// Negative durations, delays and distances become zero, the threshold
    /// is clamped into `[0, 1]`, and non-finite values take their defaults.
    pub fn normalized(self) -> Self {
        Self {
            direction: self.direction,
            duration_ms: non_negative(self.duration_ms, DEFAULT_DURATION_MS),
            delay_ms: non_negative(self.delay_ms, DEFAULT_DELAY_MS),
            distance: non_negative(self.distance, DEFAULT_DISTANCE),
            threshold: if self.threshold.is_finite() {
                self.threshold.clamp(0.0, 1.0)
            } else {
                DEFAULT_THRESHOLD
            },
            once: self.once,
        }
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        use SlideDirection::*;

        let config = match name {
            "from-bottom" => Self::new(FromBottom),
            "from-left" => Self::new(FromLeft),
            "from-right" => Self::new(FromRight),
            "from-top" => Self::new(FromTop),

            "fast-from-bottom" => Self::new(FromBottom).duration(600.0).distance(30.0),
            "fast-from-left" => Self::new(FromLeft).duration(600.0).distance(30.0),
            "fast-from-right" => Self::new(FromRight).duration(600.0).distance(30.0),

            "slow-from-bottom" => Self::new(FromBottom).duration(1200.0).distance(80.0),

            "staggered-1" => Self::new(FromBottom),
            "staggered-2" => Self::new(FromBottom).delay(200.0),
            "staggered-3" => Self::new(FromBottom).delay(400.0),
            "staggered-4" => Self::new(FromBottom).delay(600.0),

            "hero-icon" => Self::new(FromTop).duration(1000.0).delay(200.0).distance(60.0),
            "hero-title" => Self::new(FromBottom).duration(1000.0).delay(400.0).distance(40.0),
            "hero-subtitle" => Self::new(FromBottom).duration(1000.0).delay(600.0).distance(30.0),
            "hero-description" => {
                Self::new(FromBottom).duration(1000.0).delay(800.0).distance(30.0)
            }
            "hero-buttons" => Self::new(FromBottom).duration(1000.0).delay(1000.0).distance(30.0),

            _ => return None,
        };

        Some(config)
    }

    /// Staggered variant: the same animation delayed by `step_ms` per index.
    pub fn staggered(self, index: usize, step_ms: f64) -> Self {
        self.delay(self.delay_ms + step_ms * index as f64)
    }
}

fn non_negative(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        default
    }
}
