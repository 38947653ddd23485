//! Navigation lifecycle events and an explicit subscription bus.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts translate framework/DOM events (mount, popstate, beforeunload,
//! anchor clicks) into [`NavigationEvent`]s and publish them here. The
//! restoration engine subscribes once via [`crate::restore::attach`] and the
//! host unsubscribes on teardown, so no handler outlives its component.

use crate::key::Location;
use crate::link::LinkClick;

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// A navigation-relevant moment in the page lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    /// The navigation-aware component mounted.
    Mount,
    /// The navigation-aware component is being torn down.
    Unmount,
    /// The router is about to leave the current location.
    RouteChangeStart,
    /// The router finished moving to a new location.
    RouteChangeComplete,
    /// Browser back/forward.
    PopState,
    /// The document is about to unload.
    BeforeUnload,
    /// An anchor was clicked.
    LinkClick(LinkClick),
    /// A click landed inside a marked content section.
    SectionClick,
}

/// An event together with where and when it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifecycleSignal {
    pub event: NavigationEvent,
    pub location: Location,
    /// Host clock in milliseconds.
    pub at_ms: u64,
}

impl LifecycleSignal {
    #[must_use]
    pub fn new(event: NavigationEvent, location: Location, at_ms: u64) -> Self {
        Self { event, location, at_ms }
    }
}

/// Handle returned by [`LifecycleBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&LifecycleSignal)>;

/// Single-threaded publish/subscribe for lifecycle signals.
#[derive(Default)]
pub struct LifecycleBus {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl LifecycleBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it receives every signal emitted until unsubscribed.
    pub fn subscribe(&mut self, listener: impl FnMut(&LifecycleSignal) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver `signal` to every listener in subscription order.
    pub fn emit(&mut self, signal: &LifecycleSignal) {
        for (_, listener) in &mut self.listeners {
            listener(signal);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
