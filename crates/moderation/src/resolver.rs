//! Guild configuration resolution: cache-aside over the persistent store,
//! with negative caching.

use std::{sync::Arc, time::Duration};

use {
    serde::{Serialize, de::DeserializeOwned},
    tracing::{debug, instrument, warn},
};

use modwarden_common::FilterKind;

use crate::{
    cache::Cache,
    config::{LanguageFilterConfig, StrongLanguageConfig},
    error::{Error, Result},
    store::{FeatureStore, LanguageFeatures},
};

/// How long a resolved config (or its recorded absence) stays cached.
/// Bounds staleness after an administrative change.
pub const CONFIG_TTL: Duration = Duration::from_secs(300);

/// Resolves per-guild filter configuration, cache first, store second.
///
/// Absence is cached too (as JSON `null`), so an unconfigured guild costs
/// at most one store read per filter kind per TTL window. Concurrent
/// resolutions for the same key may race into redundant store reads; the
/// idempotent overwrite converges them.
pub struct ConfigResolver {
    cache: Arc<dyn Cache>,
    store: Arc<dyn FeatureStore>,
}

impl ConfigResolver {
    pub fn new(cache: Arc<dyn Cache>, store: Arc<dyn FeatureStore>) -> Self {
        Self { cache, store }
    }

    #[instrument(skip(self))]
    pub async fn strong_language(&self, guild_id: &str) -> Result<Option<StrongLanguageConfig>> {
        self.resolve(guild_id, FilterKind::StrongLanguage, |features| {
            features.strong_language
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn language_filter(&self, guild_id: &str) -> Result<Option<LanguageFilterConfig>> {
        self.resolve(guild_id, FilterKind::LanguageFilter, |features| {
            features.language_filter
        })
        .await
    }

    async fn resolve<T, F>(&self, guild_id: &str, kind: FilterKind, project: F) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(LanguageFeatures) -> Option<T>,
    {
        let key = kind.config_key(guild_id);

        match self.cache.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Option<T>>(&raw) {
                Ok(config) => {
                    debug!(%key, "config cache hit");
                    return Ok(config);
                },
                // Corrupt payloads degrade to a miss and get rewritten.
                Err(err) => warn!(%key, error = %err, "corrupt cached config, refetching"),
            },
            Ok(None) => debug!(%key, "config cache miss"),
            Err(err) => warn!(%key, error = %err, "cache read failed, falling back to store"),
        }

        let features = self
            .store
            .find_language_features(guild_id)
            .await
            .map_err(Error::ConfigFetch)?
            .unwrap_or_default();
        let config = project(features);

        match serde_json::to_string(&config) {
            Ok(raw) => {
                // A failed write only costs an extra store read later.
                if let Err(err) = self.cache.set_with_expiry(&key, &raw, CONFIG_TTL).await {
                    warn!(%key, error = %err, "config cache write failed");
                }
            },
            Err(err) => warn!(%key, error = %err, "config serialization failed"),
        }

        Ok(config)
    }
}
