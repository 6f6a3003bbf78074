//! Session workbenches and their in-memory store.
//!
//! A workbench pairs the per-mode input collector with the render
//! configuration a browser session is editing. Workbenches live in a moka
//! cache with time-to-idle expiry; dropping one releases its collector
//! state and any uploaded logo bytes.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use tokio::sync::Mutex;
use uuid::Uuid;

use qrforge_core::Collector;
use qrforge_core::render_config::RenderConfig;

/// One browser session's editing state.
#[derive(Debug)]
pub struct Workbench {
    pub collector: Collector,
    pub config: RenderConfig,
    pub created_at: DateTime<Utc>,
}

impl Workbench {
    #[must_use]
    pub fn new() -> Self {
        Self {
            collector: Collector::new(),
            config: RenderConfig::default(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a workbench; handlers lock it for the duration of one
/// mutation or snapshot.
pub type SharedWorkbench = Arc<Mutex<Workbench>>;

/// UUID-keyed workbench store with idle expiry.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<Uuid, SharedWorkbench>,
}

impl SessionStore {
    /// Create a store whose entries expire after `ttl` without access.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Cache::builder().time_to_idle(ttl).build(),
        }
    }

    /// Create a fresh workbench and return its id and handle.
    pub async fn create(&self) -> (Uuid, SharedWorkbench) {
        let id = Uuid::new_v4();
        let workbench = Arc::new(Mutex::new(Workbench::new()));
        self.cache.insert(id, Arc::clone(&workbench)).await;
        (id, workbench)
    }

    /// Look up a workbench, refreshing its idle timer.
    pub async fn get(&self, id: Uuid) -> Option<SharedWorkbench> {
        self.cache.get(&id).await
    }

    /// Drop a workbench immediately.
    pub async fn remove(&self, id: Uuid) {
        self.cache.invalidate(&id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get_returns_the_same_workbench() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, created) = store.create().await;
        let fetched = store.get(id).await.expect("workbench exists");
        assert!(Arc::ptr_eq(&created, &fetched));
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn remove_drops_the_workbench() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, _) = store.create().await;
        store.remove(id).await;
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn fresh_workbench_has_default_state() {
        let workbench = Workbench::new();
        assert_eq!(workbench.collector.payload(), "");
        assert_eq!(workbench.config, RenderConfig::default());
    }
}
