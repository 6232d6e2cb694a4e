//! Scroll-triggered reveal animations.
//!
//! Each animated element gets a [`RevealController`]. The controller
//! subscribes to a [`VisibilitySource`] for that element and turns the
//! reported visible fraction into a small state machine, from which
//! [`RevealController::compute_style`] derives the inline style the view
//! applies (offset, opacity and transition).
//!
//! The crate knows nothing about any particular platform: hosts inject the
//! source. A source that cannot observe visibility reveals immediately.

pub mod config;
pub mod controller;
pub mod direction;
pub mod source;
pub mod style;

pub use config::{RevealConfig, PRESETS};
pub use controller::{is_in_view, RevealController, RevealPhase};
pub use direction::SlideDirection;
pub use source::{ManualVisibility, Subscription, Unsupported, VisibilityCallback, VisibilitySource};
pub use style::{CubicBezier, RevealStyle, REVEAL_EASING, VISIBLE_TRANSFORM};
