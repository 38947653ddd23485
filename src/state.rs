//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! contact store is a trait object so handler tests can swap Postgres for an
//! in-memory store.

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::contact::{ContactStore, PgContactStore};

/// Shared application state. Clone is required by Axum; fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactStore>,
}

impl AppState {
    #[must_use]
    pub fn new(contacts: Arc<dyn ContactStore>) -> Self {
        Self { contacts }
    }

    /// Production state backed by Postgres.
    #[must_use]
    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgContactStore::new(pool)))
    }
}
