//! Capture/restore engine.
//!
//! DESIGN
//! ======
//! `ScrollRestoration` reacts to lifecycle signals. Captures write through to
//! the store immediately. Restores are deferred by `restore_ready_delay_ms`
//! so freshly mounted content can lay out, then the viewport jumps (never
//! animates) to the stored offset. A consumed record is kept for
//! `record_expiry_ms` so overlapping triggers (mount + popstate) can both
//! apply it, then removed.
//!
//! Deferred work is a plain queue of due-time tasks. The host asks for
//! [`ScrollRestoration::next_due`], arms one timer, and calls
//! [`ScrollRestoration::run_due`] when it fires.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Store failures become
//! [`Outcome::StoreFailed`] so the host can log them and move on.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::key::{Location, NavigationKey};
use crate::lifecycle::{LifecycleBus, LifecycleSignal, NavigationEvent, SubscriptionId};
use crate::link::{LinkClick, LinkDecision, classify_link};
use crate::store::{DEFAULT_STORAGE_PREFIX, KeyValueStore, ScrollMemory, ScrollRecord, StoreError};

#[cfg(test)]
#[path = "restore_test.rs"]
mod restore_test;

pub const DEFAULT_RESTORE_READY_DELAY_MS: u64 = 100;
pub const DEFAULT_RECORD_EXPIRY_MS: u64 = 1_000;
pub const DEFAULT_LISTING_PREFIX: &str = "/research";
pub const DEFAULT_SECTION_MARKER: &str = "data-scroll-section";

/// Tunables for capture and restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Delay between a restore trigger and the actual jump.
    pub restore_ready_delay_ms: u64,
    /// How long an applied record survives before removal.
    pub record_expiry_ms: u64,
    /// Prefix for backend storage keys.
    pub storage_prefix: String,
    /// Routes under this path capture on content-section clicks.
    pub listing_prefix: String,
    /// Attribute marking content sections (the host queries `[marker]`).
    pub section_marker: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            restore_ready_delay_ms: DEFAULT_RESTORE_READY_DELAY_MS,
            record_expiry_ms: DEFAULT_RECORD_EXPIRY_MS,
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_owned(),
            listing_prefix: DEFAULT_LISTING_PREFIX.to_owned(),
            section_marker: DEFAULT_SECTION_MARKER.to_owned(),
        }
    }
}

impl ScrollConfig {
    /// Default config with both delays set to zero.
    #[must_use]
    pub fn immediate() -> Self {
        Self { restore_ready_delay_ms: 0, record_expiry_ms: 0, ..Self::default() }
    }
}

/// The scrollable surface.
pub trait Viewport {
    /// Current vertical offset in pixels.
    fn scroll_offset(&self) -> u32;

    /// Move to `offset` without animation. The viewport clamps to its own
    /// maximum scrollable offset.
    fn jump_to(&self, offset: u32);
}

/// Which store operation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreOp {
    Save,
    Load,
    Remove,
}

/// What a lifecycle signal or timer tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Captured(ScrollRecord),
    /// Link click that does not leave the page.
    LinkIgnored(LinkDecision),
    /// Section click outside the listing routes.
    SectionIgnored,
    RestoreScheduled { key: NavigationKey, due_ms: u64 },
    Restored(ScrollRecord),
    NothingToRestore(NavigationKey),
    Expired(NavigationKey),
    /// Pending tasks dropped on unmount; `expired` records were removed
    /// early.
    Cancelled { tasks: usize, expired: usize },
    StoreFailed { op: StoreOp, key: NavigationKey, error: StoreError },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Task {
    Restore(NavigationKey),
    Expire(NavigationKey),
}

#[derive(Clone, Debug)]
struct Pending {
    due_ms: u64,
    task: Task,
}

/// Scroll capture/restore state machine.
pub struct ScrollRestoration<S, V> {
    memory: ScrollMemory<S>,
    viewport: V,
    config: ScrollConfig,
    pending: Vec<Pending>,
}

impl<S: KeyValueStore, V: Viewport> ScrollRestoration<S, V> {
    #[must_use]
    pub fn new(store: S, viewport: V, config: ScrollConfig) -> Self {
        let memory = ScrollMemory::new(store, config.storage_prefix.clone());
        Self { memory, viewport, config, pending: Vec::new() }
    }

    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Dispatch one lifecycle signal.
    pub fn handle(&mut self, signal: &LifecycleSignal) -> Outcome {
        let location = &signal.location;
        match &signal.event {
            NavigationEvent::Mount | NavigationEvent::PopState | NavigationEvent::RouteChangeComplete => {
                self.schedule_restore(location, signal.at_ms)
            }
            NavigationEvent::BeforeUnload | NavigationEvent::RouteChangeStart => self.capture(location),
            NavigationEvent::LinkClick(click) => self.capture_on_link(location, click),
            NavigationEvent::SectionClick => self.capture_on_section(location),
            NavigationEvent::Unmount => self.cancel_all(),
        }
    }

    /// Snapshot the viewport offset under the key for `location`.
    ///
    /// Capturing means the user is leaving `location`: a restore still queued
    /// for it is dropped, and so is a pending expiry, so the fresh record is
    /// neither applied to the next page nor deleted by an earlier grace timer.
    pub fn capture(&mut self, location: &Location) -> Outcome {
        let record = ScrollRecord { key: location.key(), offset: self.viewport.scroll_offset() };
        self.pending.retain(|p| match &p.task {
            Task::Restore(key) | Task::Expire(key) => *key != record.key,
        });
        match self.memory.save(&record) {
            Ok(()) => Outcome::Captured(record),
            Err(error) => Outcome::StoreFailed { op: StoreOp::Save, key: record.key, error },
        }
    }

    /// Capture if `click` navigates to another internal path.
    pub fn capture_on_link(&mut self, location: &Location, click: &LinkClick) -> Outcome {
        match classify_link(location, click) {
            LinkDecision::Capture => self.capture(location),
            other => Outcome::LinkIgnored(other),
        }
    }

    /// Capture if `location` is on a listing route.
    pub fn capture_on_section(&mut self, location: &Location) -> Outcome {
        if location.is_under(&self.config.listing_prefix) {
            self.capture(location)
        } else {
            Outcome::SectionIgnored
        }
    }

    /// Queue a restore for `location`. A restore already queued for the same
    /// key is kept rather than duplicated; restores queued for any other key
    /// are dropped since only one location is current.
    pub fn schedule_restore(&mut self, location: &Location, now_ms: u64) -> Outcome {
        let key = location.key();
        self.pending
            .retain(|p| !matches!(&p.task, Task::Restore(queued) if *queued != key));
        let existing = self
            .pending
            .iter()
            .find(|p| p.task == Task::Restore(key.clone()))
            .map(|p| p.due_ms);
        let due_ms = match existing {
            Some(due_ms) => due_ms,
            None => {
                let due_ms = now_ms.saturating_add(self.config.restore_ready_delay_ms);
                self.pending.push(Pending { due_ms, task: Task::Restore(key.clone()) });
                due_ms
            }
        };
        Outcome::RestoreScheduled { key, due_ms }
    }

    /// Drop every pending task. Records already applied and waiting for
    /// their grace period are removed now rather than left in the store.
    pub fn cancel_all(&mut self) -> Outcome {
        let tasks = self.pending.len();
        let mut expired = 0;
        for Pending { task, .. } in std::mem::take(&mut self.pending) {
            if let Task::Expire(key) = task {
                if self.memory.forget(&key).is_ok() {
                    expired += 1;
                }
            }
        }
        Outcome::Cancelled { tasks, expired }
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Run every task due at or before `now_ms`, earliest first. Tasks queued
    /// while running (expiries) run in the same call if already due.
    pub fn run_due(&mut self, now_ms: u64) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        while let Some(idx) = self.earliest_due(now_ms) {
            let Pending { task, .. } = self.pending.remove(idx);
            let outcome = match task {
                Task::Restore(key) => self.restore_now(key, now_ms),
                Task::Expire(key) => match self.memory.forget(&key) {
                    Ok(()) => Outcome::Expired(key),
                    Err(error) => Outcome::StoreFailed { op: StoreOp::Remove, key, error },
                },
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    fn earliest_due(&self, now_ms: u64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= now_ms)
            .min_by_key(|(_, p)| p.due_ms)
            .map(|(idx, _)| idx)
    }

    fn restore_now(&mut self, key: NavigationKey, now_ms: u64) -> Outcome {
        let record = match self.memory.load(&key) {
            Ok(Some(record)) => record,
            Ok(None) => return Outcome::NothingToRestore(key),
            Err(error) => return Outcome::StoreFailed { op: StoreOp::Load, key, error },
        };
        self.viewport.jump_to(record.offset);

        let expiry = Task::Expire(key);
        if !self.pending.iter().any(|p| p.task == expiry) {
            let due_ms = now_ms.saturating_add(self.config.record_expiry_ms);
            self.pending.push(Pending { due_ms, task: expiry });
        }
        Outcome::Restored(record)
    }
}

/// Subscribe `engine` to `bus`; every outcome is passed to `report`.
pub fn attach<S, V, F>(
    engine: &Rc<RefCell<ScrollRestoration<S, V>>>,
    bus: &mut LifecycleBus,
    mut report: F,
) -> SubscriptionId
where
    S: KeyValueStore + 'static,
    V: Viewport + 'static,
    F: FnMut(&Outcome) + 'static,
{
    let engine = Rc::clone(engine);
    bus.subscribe(move |signal| {
        let outcome = engine.borrow_mut().handle(signal);
        report(&outcome);
    })
}
