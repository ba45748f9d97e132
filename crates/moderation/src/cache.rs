//! Cache collaborator and an in-memory implementation.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use {anyhow::Result, async_trait::async_trait, tokio::sync::RwLock};

/// Key/value cache with per-entry expiry.
///
/// Shaped after the Redis commands the deployment actually uses; any
/// backend that can `GET` and `SET ... EX` fits.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;
}

/// In-memory TTL cache for tests and single-process deployments.
///
/// Expired entries are filtered on read; nothing sweeps them out, which is
/// fine for the small per-guild key space this core produces.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, (String, Instant)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|(_, deadline)| Instant::now() < *deadline)
            .map(|(value, _)| value.clone()))
    }

    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }
}
