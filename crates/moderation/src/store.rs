//! Persistent feature-store collaborator.

use {
    anyhow::Result,
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
};

use crate::config::{LanguageFilterConfig, StrongLanguageConfig};

/// Projection of a guild's language feature sub-document.
///
/// The store holds a larger per-guild feature document; this core only
/// ever asks for the `language` branch of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong_language: Option<StrongLanguageConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_filter: Option<LanguageFilterConfig>,
}

/// Read-only view of the guild feature store.
#[async_trait]
pub trait FeatureStore: Send + Sync {
    /// The language sub-document for a guild, or `None` when the guild has
    /// no feature document at all.
    async fn find_language_features(&self, guild_id: &str) -> Result<Option<LanguageFeatures>>;
}
