//! Navigation key derivation.
//!
//! Capture and restore only round-trip if both derive the key the same way,
//! so every key in the crate is built by [`NavigationKey::new`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;

/// Opaque identifier for a logical page location: path plus query string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationKey(String);

impl NavigationKey {
    /// Build the key for `path` and `search`.
    ///
    /// `search` may be given with or without its leading `?`; an empty query
    /// (or a bare `?`) contributes nothing. An empty path is treated as `/`.
    #[must_use]
    pub fn new(path: &str, search: &str) -> Self {
        let path = if path.is_empty() { "/" } else { path };
        let query = search.strip_prefix('?').unwrap_or(search);
        if query.is_empty() {
            Self(path.to_owned())
        } else {
            Self(format!("{path}?{query}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavigationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the user currently is, as reported by the routing layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub search: String,
}

impl Location {
    #[must_use]
    pub fn new(path: impl Into<String>, search: impl Into<String>) -> Self {
        Self { path: path.into(), search: search.into() }
    }

    /// Navigation key for this location.
    #[must_use]
    pub fn key(&self) -> NavigationKey {
        NavigationKey::new(&self.path, &self.search)
    }

    /// Whether the path is `prefix` itself or nested below it.
    ///
    /// `/research` and `/research/zk-rollups` are under `/research`;
    /// `/researchers` is not.
    #[must_use]
    pub fn is_under(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return true;
        }
        match self.path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}
