//! Scroll record persistence over a string key-value store.
//!
//! DESIGN
//! ======
//! The browser's session storage is modelled as [`KeyValueStore`] so the
//! same capture/restore logic runs against an in-memory map in tests. Every
//! record lives under `prefix + navigation key` and holds the offset as a
//! decimal string. Writes overwrite, so there is at most one record per key.
//!
//! ERROR HANDLING
//! ==============
//! Store calls return [`StoreError`]; callers higher up decide to swallow
//! them. A value that does not parse as an offset is reported as "no record",
//! never as an error.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::key::NavigationKey;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Storage key prefix used when none is configured.
pub const DEFAULT_STORAGE_PREFIX: &str = "scroll_pos:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable (disabled by policy, no window, private mode).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security error).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Minimal string key-value store, shaped after `Storage` in the browser.
pub trait KeyValueStore {
    /// Read the value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A captured scroll position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRecord {
    pub key: NavigationKey,
    /// Vertical distance from document top, in CSS pixels.
    pub offset: u32,
}

/// Typed view over a [`KeyValueStore`] holding scroll records.
#[derive(Clone, Debug)]
pub struct ScrollMemory<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> ScrollMemory<S> {
    #[must_use]
    pub fn new(store: S, prefix: impl Into<String>) -> Self {
        Self { store, prefix: prefix.into() }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Backend key under which the record for `key` is stored.
    #[must_use]
    pub fn storage_key(&self, key: &NavigationKey) -> String {
        format!("{}{}", self.prefix, key.as_str())
    }

    /// Persist `record`, overwriting any previous record for the same key.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn save(&self, record: &ScrollRecord) -> Result<(), StoreError> {
        self.store
            .set(&self.storage_key(&record.key), &record.offset.to_string())
    }

    /// Read the record for `key`. Missing or unparseable values yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn load(&self, key: &NavigationKey) -> Result<Option<ScrollRecord>, StoreError> {
        let Some(raw) = self.store.get(&self.storage_key(key))? else {
            return Ok(None);
        };
        Ok(parse_offset(&raw).map(|offset| ScrollRecord { key: key.clone(), offset }))
    }

    /// Delete the record for `key`.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn forget(&self, key: &NavigationKey) -> Result<(), StoreError> {
        self.store.remove(&self.storage_key(key))
    }
}

/// Parse a stored offset.
///
/// Integers are taken as-is; fractional values (some browsers report
/// sub-pixel scroll positions) are rounded. Negative, non-finite or
/// non-numeric input yields `None`.
#[must_use]
pub fn parse_offset(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(offset) = raw.parse::<u32>() {
        return Some(offset);
    }
    match raw.parse::<f64>() {
        Ok(px) if px.is_finite() && px >= 0.0 => Some(offset_from_pixels(px)),
        _ => None,
    }
}

/// Convert a browser scroll position to a stored offset.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn offset_from_pixels(px: f64) -> u32 {
    if !px.is_finite() || px <= 0.0 {
        return 0;
    }
    if px >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    px.round() as u32
}
