//! Scroll-threshold observer.
//!
//! A [`ScrollWatch`] subscribes to a [`ScrollSource`], keeps a single
//! "past threshold" flag, and calls back only when that flag flips. The
//! subscription is released when the watch is dropped, so tying the watch to
//! a component's lifetime guarantees teardown on every exit path.
//!
//! The boundary is exclusive: an offset equal to the threshold is not past it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Which side of the threshold counts as "active" for the observer's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Active once the offset is past the threshold (header background).
    ActiveWhenPast,
    /// Active until the offset passes the threshold (hero scroll indicator).
    ActiveUntilPast,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    pub threshold: f64,
    pub polarity: Polarity,
}

impl ScrollThreshold {
    pub fn new(threshold: f64, polarity: Polarity) -> Self {
        Self {
            threshold,
            polarity,
        }
    }

    pub fn is_past(&self, offset: f64) -> bool {
        offset > self.threshold
    }

    pub fn is_active(&self, offset: f64) -> bool {
        self.active_for(self.is_past(offset))
    }

    fn active_for(&self, past: bool) -> bool {
        match self.polarity {
            Polarity::ActiveWhenPast => past,
            Polarity::ActiveUntilPast => !past,
        }
    }
}

/// The flag itself, independent of any event source.
#[derive(Clone, Debug)]
pub struct ThresholdState {
    rule: ScrollThreshold,
    past: bool,
}

impl ThresholdState {
    pub fn new(rule: ScrollThreshold, initial_offset: f64) -> Self {
        Self {
            rule,
            past: rule.is_past(initial_offset),
        }
    }

    pub fn is_past(&self) -> bool {
        self.past
    }

    pub fn is_active(&self) -> bool {
        self.rule.active_for(self.past)
    }

    /// Feed a new offset. Returns the new active value if the threshold was
    /// crossed, `None` otherwise.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let past = self.rule.is_past(offset);
        if past == self.past {
            return None;
        }
        self.past = past;
        tracing::debug!(
            offset,
            threshold = self.rule.threshold,
            past,
            "scroll threshold crossed"
        );
        Some(self.is_active())
    }
}

/// A vertical scroll-offset signal.
pub trait ScrollSource {
    /// Token returned by `subscribe`, handed back to `unsubscribe`.
    type Subscription;

    fn current_offset(&self) -> f64;

    fn subscribe(&self, listener: Box<dyn FnMut(f64)>) -> Self::Subscription;

    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// A live subscription that tracks one threshold. Dropping it detaches the
/// listener from the source.
pub struct ScrollWatch<S: ScrollSource> {
    source: S,
    subscription: Option<S::Subscription>,
    state: Rc<RefCell<ThresholdState>>,
}

impl<S: ScrollSource> ScrollWatch<S> {
    /// Subscribe to `source`. `on_change` receives the new active value each
    /// time the threshold is crossed; it is not called for the initial state,
    /// read that with [`ScrollWatch::is_active`].
    pub fn attach<F>(source: S, rule: ScrollThreshold, mut on_change: F) -> Self
    where
        F: FnMut(bool) + 'static,
    {
        let state = Rc::new(RefCell::new(ThresholdState::new(
            rule,
            source.current_offset(),
        )));
        let listener_state = Rc::clone(&state);
        let subscription = source.subscribe(Box::new(move |offset| {
            let crossed = listener_state.borrow_mut().observe(offset);
            if let Some(active) = crossed {
                on_change(active);
            }
        }));

        Self {
            source,
            subscription: Some(subscription),
            state,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().is_active()
    }

    pub fn is_past(&self) -> bool {
        self.state.borrow().is_past()
    }

    /// Release the subscription now instead of at end of scope.
    pub fn detach(self) {}
}

impl<S: ScrollSource> Drop for ScrollWatch<S> {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
        }
    }
}

type Listener = Box<dyn FnMut(f64)>;

/// In-memory scroll source. Used off-browser and in tests; offsets are pushed
/// with [`ManualScroll::scroll_to`].
#[derive(Default)]
pub struct ManualScroll {
    offset: Cell<f64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    // Unsubscribed while their listener list was checked out for dispatch.
    // Only the outermost dispatch drains this.
    cancelled: RefCell<Vec<u64>>,
    depth: Cell<usize>,
}

impl ManualScroll {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Set the offset and notify every listener, in subscription order.
    /// Listeners unsubscribed mid-dispatch are not called again.
    pub fn scroll_to(&self, offset: f64) {
        self.offset.set(offset);
        self.depth.set(self.depth.get() + 1);

        let mut dispatching = std::mem::take(&mut *self.listeners.borrow_mut());
        for (id, listener) in dispatching.iter_mut() {
            if !self.cancelled.borrow().contains(id) {
                listener(offset);
            }
        }

        let depth = self.depth.get() - 1;
        self.depth.set(depth);

        let mut listeners = self.listeners.borrow_mut();
        dispatching.append(&mut listeners);
        if depth == 0 {
            let cancelled = std::mem::take(&mut *self.cancelled.borrow_mut());
            dispatching.retain(|(id, _)| !cancelled.contains(id));
        }
        *listeners = dispatching;
    }
}

impl ScrollSource for Rc<ManualScroll> {
    type Subscription = u64;

    fn current_offset(&self) -> f64 {
        self.offset.get()
    }

    fn subscribe(&self, listener: Box<dyn FnMut(f64)>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, subscription: u64) {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|(id, _)| *id == subscription) {
            Some(index) => {
                listeners.remove(index);
            }
            None => self.cancelled.borrow_mut().push(subscription),
        }
    }
}
