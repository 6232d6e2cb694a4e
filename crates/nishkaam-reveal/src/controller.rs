//! Per-element reveal controller.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::RevealConfig;
use crate::source::{Subscription, VisibilitySource};
use crate::style::RevealStyle;

/// Where an element is in its entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Waiting to enter view
    #[default]
    Hidden,
    /// In view; may hide again (only without `once`)
    Visible,
    /// Entered view with `once` set. Terminal.
    Revealed,
}

impl RevealPhase {
    /// Whether the element should be drawn in place.
    pub fn is_shown(self) -> bool {
        !matches!(self, RevealPhase::Hidden)
    }

    /// Next phase after a visibility signal.
    pub fn on_signal(self, visible: bool, once: bool) -> Self {
        match self {
            RevealPhase::Revealed => RevealPhase::Revealed,
            _ if visible && once => RevealPhase::Revealed,
            _ if visible => RevealPhase::Visible,
            _ if once => self,
            _ => RevealPhase::Hidden,
        }
    }
}

/// Whether a visible fraction counts as "in view" for a threshold.
///
/// The element must actually intersect the viewport, so a zero ratio never
/// counts even with a zero threshold.
pub fn is_in_view(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}

/// Drives one element's entrance animation from visibility signals.
///
/// Controllers are single-threaded and independent: every element gets its
/// own, and nothing is shared between them.
pub struct RevealController {
    config: RevealConfig,
    phase: Rc<Cell<RevealPhase>>,
    subscription: Option<Subscription>,
}

impl RevealController {
    /// A hidden controller that is not observing anything yet.
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config: config.normalized(),
            phase: Rc::new(Cell::new(RevealPhase::Hidden)),
            subscription: None,
        }
    }

    /// Create a controller and start observing `source`.
    pub fn mount(config: RevealConfig, source: &dyn VisibilitySource) -> Self {
        let mut controller = Self::new(config);
        controller.observe(source);
        controller
    }

    /// Start observing `source`, replacing any previous subscription.
    ///
    /// A source without observation capability reveals the element
    /// immediately so content is never stuck invisible.
    pub fn observe(&mut self, source: &dyn VisibilitySource) {
        self.subscription = None;

        let phase = Rc::clone(&self.phase);
        let threshold = self.config.threshold;
        let once = self.config.once;

        let subscription = source.subscribe(
            threshold,
            Box::new(move |ratio| {
                let current = phase.get();
                let next = current.on_signal(is_in_view(ratio, threshold), once);
                if next != current {
                    tracing::trace!("reveal {:?} -> {:?} at ratio {}", current, next, ratio);
                    phase.set(next);
                }
            }),
        );

        match subscription {
            Some(subscription) => self.subscription = Some(subscription),
            None => {
                tracing::debug!("visibility observation unavailable, revealing immediately");
                self.phase.set(RevealPhase::Revealed);
            }
        }
    }

    /// Stop observing. The controller keeps its current phase.
    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase.get()
    }

    pub fn is_visible(&self) -> bool {
        self.phase().is_shown()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Style for the current phase.
    pub fn compute_style(&self) -> RevealStyle {
        if self.is_visible() {
            RevealStyle::visible(&self.config)
        } else {
            RevealStyle::hidden(&self.config)
        }
    }
}

impl std::fmt::Debug for RevealController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealController")
            .field("config", &self.config)
            .field("phase", &self.phase.get())
            .field("observing", &self.subscription.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::SlideDirection;
    use crate::source::{ManualVisibility, Unsupported};
    use crate::style::VISIBLE_TRANSFORM;
    use pretty_assertions::assert_eq;

    fn timeline_config() -> RevealConfig {
        RevealConfig::new(SlideDirection::FromBottom)
            .distance(50.0)
            .duration(800.0)
            .delay(0.0)
            .threshold(0.2)
            .once(true)
    }

    #[test]
    fn starts_hidden() {
        let source = ManualVisibility::new();
        let controller = RevealController::mount(RevealConfig::default(), &source);

        assert_eq!(controller.phase(), RevealPhase::Hidden);
        assert!(controller.is_observing());
        assert_eq!(controller.compute_style().opacity, 0.0);
    }

    #[test]
    fn reveal_timeline() {
        let source = ManualVisibility::new();
        let controller = RevealController::mount(timeline_config(), &source);

        let before = controller.compute_style();
        assert_eq!(before.transform, "translateY(50px)");
        assert_eq!(before.opacity, 0.0);

        source.set_ratio(0.25);

        let after = controller.compute_style();
        assert_eq!(after.transform, "translate(0)");
        assert_eq!(after.opacity, 1.0);
        assert_eq!(after.transition, before.transition);
        assert_eq!(after.transition, "all 800ms cubic-bezier(0.4, 0, 0.2, 1) 0ms");
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let source = ManualVisibility::new();
        let controller = RevealController::mount(timeline_config(), &source);

        source.set_ratio(0.15);

        assert_eq!(controller.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn once_latches_visible() {
        let source = ManualVisibility::new();
        let controller = RevealController::mount(timeline_config(), &source);

        source.set_ratio(0.5);
        for ratio in [0.0, 0.1, 0.0, 0.19, 0.0] {
            source.set_ratio(ratio);
            let style = controller.compute_style();
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.transform, VISIBLE_TRANSFORM);
        }
        assert_eq!(controller.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn without_once_oscillates() {
        let source = ManualVisibility::new();
        let config = RevealConfig::new(SlideDirection::FromLeft)
            .distance(30.0)
            .threshold(0.5)
            .once(false);
        let controller = RevealController::mount(config, &source);

        for _ in 0..3 {
            source.set_ratio(0.6);
            assert_eq!(controller.phase(), RevealPhase::Visible);
            assert_eq!(controller.compute_style().transform, VISIBLE_TRANSFORM);

            source.set_ratio(0.4);
            assert_eq!(controller.phase(), RevealPhase::Hidden);
            let style = controller.compute_style();
            assert_eq!(style.transform, "translateX(-30px)");
            assert_eq!(style.opacity, 0.0);
        }
    }

    #[test]
    fn hidden_transform_follows_direction() {
        let expected = [
            (SlideDirection::FromTop, "translateY(-50px)"),
            (SlideDirection::FromBottom, "translateY(50px)"),
            (SlideDirection::FromLeft, "translateX(-50px)"),
            (SlideDirection::FromRight, "translateX(50px)"),
        ];

        for (direction, transform) in expected {
            let controller = RevealController::new(RevealConfig::new(direction));
            assert_eq!(controller.compute_style().transform, transform);
        }
    }

    #[test]
    fn zero_ratio_never_counts_as_in_view() {
        assert!(!is_in_view(0.0, 0.0));
        assert!(is_in_view(0.01, 0.0));
        assert!(is_in_view(0.2, 0.2));
        assert!(!is_in_view(f64::NAN, 0.1));
    }

    #[test]
    fn missing_capability_reveals_immediately() {
        let controller = RevealController::mount(timeline_config(), &Unsupported);

        assert_eq!(controller.phase(), RevealPhase::Revealed);
        assert!(!controller.is_observing());
        assert_eq!(controller.compute_style().opacity, 1.0);
    }

    #[test]
    fn elements_are_independent() {
        let top = ManualVisibility::new();
        let bottom = ManualVisibility::new();
        let first = RevealController::mount(RevealConfig::default(), &top);
        let second = RevealController::mount(RevealConfig::default(), &bottom);

        top.enter();

        assert!(first.is_visible());
        assert!(!second.is_visible());
    }

    #[test]
    fn unmount_detaches_and_remount_resets() {
        let source = ManualVisibility::new();
        let controller = RevealController::mount(timeline_config(), &source);
        source.enter();
        assert!(controller.is_visible());

        controller.unmount();
        assert_eq!(source.observer_count(), 0);

        let remounted = RevealController::mount(timeline_config(), &source);
        assert_eq!(remounted.phase(), RevealPhase::Hidden);
        assert_eq!(remounted.compute_style().opacity, 0.0);
    }

    #[test]
    fn clamps_configuration_on_creation() {
        let controller = RevealController::new(
            RevealConfig::new(SlideDirection::FromRight)
                .duration(-5.0)
                .threshold(3.0),
        );

        assert_eq!(controller.config().duration_ms, 0.0);
        assert_eq!(controller.config().threshold, 1.0);
        assert_eq!(
            controller.compute_style().transition,
            "all 0ms cubic-bezier(0.4, 0, 0.2, 1) 0ms"
        );
    }

    #[test]
    fn phase_transition_table() {
        use RevealPhase::*;

        assert_eq!(Hidden.on_signal(true, true), Revealed);
        assert_eq!(Hidden.on_signal(true, false), Visible);
        assert_eq!(Hidden.on_signal(false, true), Hidden);
        assert_eq!(Hidden.on_signal(false, false), Hidden);
        assert_eq!(Visible.on_signal(false, false), Hidden);
        assert_eq!(Visible.on_signal(true, false), Visible);
        assert_eq!(Revealed.on_signal(false, true), Revealed);
        assert_eq!(Revealed.on_signal(false, false), Revealed);
    }
}
