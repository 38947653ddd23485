//! Browser Web Storage access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scroll memory lives in `sessionStorage`; the language preference and the
//! contact form draft live in `localStorage`/`sessionStorage` as well. These
//! helpers centralize the hydrate-only web-sys glue and expose
//! [`BrowserStore`], the production [`KeyValueStore`] for the scroll core.
//!
//! TRADE-OFFS
//! ==========
//! Storage can be missing (SSR, privacy mode) or full. Raw accessors report
//! that as [`StoreError`]; the JSON helpers swallow it because drafts are
//! best-effort.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use scroll_memory::{KeyValueStore, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Which Web Storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Local,
    Session,
}

#[cfg(feature = "hydrate")]
fn storage(area: Area) -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    let storage = match area {
        Area::Local => window.local_storage(),
        Area::Session => window.session_storage(),
    };
    storage.map_err(|e| StoreError::Backend(format!("{e:?}")))?.ok_or(StoreError::Unavailable)
}

/// Read the raw string at `key`.
///
/// # Errors
///
/// Returns [`StoreError`] if storage is unavailable or the read throws.
pub fn get_raw(area: Area, key: &str) -> Result<Option<String>, StoreError> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.get_item(key).map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        Err(StoreError::Unavailable)
    }
}

/// Write `value` at `key`.
///
/// # Errors
///
/// Returns [`StoreError`] if storage is unavailable or the quota is exceeded.
pub fn set_raw(area: Area, key: &str, value: &str) -> Result<(), StoreError> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.set_item(key, value).map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key, value);
        Err(StoreError::Unavailable)
    }
}

/// Remove `key`.
///
/// # Errors
///
/// Returns [`StoreError`] if storage is unavailable or the removal throws.
pub fn remove_raw(area: Area, key: &str) -> Result<(), StoreError> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.remove_item(key).map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        Err(StoreError::Unavailable)
    }
}

/// Load a JSON value for `key`; `None` when missing, unreadable or malformed.
pub fn load_json<T: DeserializeOwned>(area: Area, key: &str) -> Option<T> {
    let raw = get_raw(area, key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value for `key`, ignoring storage failures.
pub fn save_json<T: Serialize>(area: Area, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    if let Err(e) = set_raw(area, key, &raw) {
        #[cfg(feature = "hydrate")]
        log::debug!("storage write skipped for {key}: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
    }
}

/// [`KeyValueStore`] over one Web Storage area.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    area: Area,
}

impl BrowserStore {
    #[must_use]
    pub fn new(area: Area) -> Self {
        Self { area }
    }

    /// Tab-scoped store used for scroll memory.
    #[must_use]
    pub fn session() -> Self {
        Self::new(Area::Session)
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        get_raw(self.area, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        set_raw(self.area, key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        remove_raw(self.area, key)
    }
}
