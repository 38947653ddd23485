//! Scroll-position memory for client-side navigation.
//!
//! This crate owns the framework-independent half of scroll restoration: how
//! a location becomes a storage key, how offsets are persisted in a
//! string key-value store, which link clicks count as "leaving the page",
//! and the small task queue that defers restores and expires consumed
//! records. The browser host (`meridian-client`) supplies a session-storage
//! backed [`store::KeyValueStore`], a window-backed [`restore::Viewport`],
//! and translates DOM events into [`lifecycle::NavigationEvent`]s.
//!
//! Nothing here blocks, spawns, or reads a clock. Time is passed in as
//! milliseconds so tests can drive it explicitly.

pub mod key;
pub mod lifecycle;
pub mod link;
pub mod restore;
pub mod store;

pub use key::{Location, NavigationKey};
pub use lifecycle::{LifecycleBus, LifecycleSignal, NavigationEvent, SubscriptionId};
pub use link::{LinkClick, LinkDecision, classify_link};
pub use restore::{Outcome, ScrollConfig, ScrollRestoration, StoreOp, Viewport, attach};
pub use store::{KeyValueStore, MemoryStore, ScrollMemory, ScrollRecord, StoreError};
