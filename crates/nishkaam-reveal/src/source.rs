//! Visibility sources.
//!
//! A source reports what fraction of one element is inside the viewport.
//! Platform observers (an intersection observer in a browser host) implement
//! [`VisibilitySource`]; [`ManualVisibility`] is the in-memory source used by
//! tests and by hosts that compute ratios themselves.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Receives visible-fraction updates, each in `[0, 1]`.
pub type VisibilityCallback = Box<dyn FnMut(f64)>;

/// Something that can observe one element's visibility.
pub trait VisibilitySource {
    /// Start delivering visibility ratios to `callback`.
    ///
    /// `threshold` is a hint for sources that only report crossings.
    /// Returns `None` when the platform cannot observe visibility at all.
    fn subscribe(&self, threshold: f64, callback: VisibilityCallback) -> Option<Subscription>;
}

/// Handle for an active subscription. Detaches on drop.
///
/// Detaching is synchronous: once `unsubscribe` returns (or the handle is
/// dropped) the callback is never invoked again.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

/// A platform with no visibility observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl VisibilitySource for Unsupported {
    fn subscribe(&self, _threshold: f64, _callback: VisibilityCallback) -> Option<Subscription> {
        None
    }
}

struct Observer {
    id: u64,
    callback: Rc<RefCell<VisibilityCallback>>,
}

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<Observer>,
}

impl Observers {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|o| o.id == id)
    }
}

/// Visibility of one element, pushed by hand.
#[derive(Clone, Default)]
pub struct ManualVisibility {
    observers: Rc<RefCell<Observers>>,
}

impl ManualVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a new visible fraction to every attached observer.
    pub fn set_ratio(&self, ratio: f64) {
        let snapshot: Vec<(u64, Rc<RefCell<VisibilityCallback>>)> = self
            .observers
            .borrow()
            .entries
            .iter()
            .map(|o| (o.id, Rc::clone(&o.callback)))
            .collect();

        for (id, callback) in snapshot {
            // An earlier callback in this pass may have detached this one.
            if !self.observers.borrow().contains(id) {
                continue;
            }
            (callback.borrow_mut())(ratio);
        }
    }

    /// Shorthand for a fully visible element.
    pub fn enter(&self) {
        self.set_ratio(1.0);
    }

    /// Shorthand for an element entirely outside the viewport.
    pub fn leave(&self) {
        self.set_ratio(0.0);
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().entries.len()
    }
}

impl std::fmt::Debug for ManualVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualVisibility")
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl VisibilitySource for ManualVisibility {
    fn subscribe(&self, _threshold: f64, callback: VisibilityCallback) -> Option<Subscription> {
        let id = {
            let mut observers = self.observers.borrow_mut();
            let id = observers.next_id;
            observers.next_id += 1;
            observers.entries.push(Observer {
                id,
                callback: Rc::new(RefCell::new(callback)),
            });
            id
        };

        let observers: Weak<RefCell<Observers>> = Rc::downgrade(&self.observers);
        Some(Subscription::new(move || {
            if let Some(observers) = observers.upgrade() {
                observers.borrow_mut().entries.retain(|o| o.id != id);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<usize>>, VisibilityCallback) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, Box::new(move |_| inner.set(inner.get() + 1)))
    }

    #[test]
    fn delivers_ratios_to_subscribers() {
        let source = ManualVisibility::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let _sub = source
            .subscribe(0.1, Box::new(move |r| sink.borrow_mut().push(r)))
            .unwrap();
        source.set_ratio(0.3);
        source.leave();

        assert_eq!(*seen.borrow(), vec![0.3, 0.0]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let source = ManualVisibility::new();
        let (count, callback) = counter();

        let sub = source.subscribe(0.1, callback).unwrap();
        source.enter();
        sub.unsubscribe();
        source.enter();

        assert_eq!(count.get(), 1);
        assert_eq!(source.observer_count(), 0);
    }

    #[test]
    fn dropping_the_handle_detaches() {
        let source = ManualVisibility::new();
        let (count, callback) = counter();

        {
            let _sub = source.subscribe(0.1, callback).unwrap();
            assert_eq!(source.observer_count(), 1);
        }
        source.enter();

        assert_eq!(count.get(), 0);
        assert_eq!(source.observer_count(), 0);
    }

    #[test]
    fn detaching_during_delivery_skips_the_detached_observer() {
        let source = ManualVisibility::new();
        let (count, second) = counter();

        let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&victim);
        let _first = source
            .subscribe(
                0.1,
                Box::new(move |_| {
                    slot.borrow_mut().take();
                }),
            )
            .unwrap();
        *victim.borrow_mut() = source.subscribe(0.1, second);

        source.enter();

        assert_eq!(count.get(), 0);
        assert_eq!(source.observer_count(), 1);
    }

    #[test]
    fn unsupported_has_no_capability() {
        let (_, callback) = counter();
        assert!(Unsupported.subscribe(0.1, callback).is_none());
    }
}
