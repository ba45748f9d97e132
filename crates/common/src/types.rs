//! Message and identifier types shared between the matcher and the
//! moderation pipeline.

use serde::{Deserialize, Serialize};

/// An inbound chat message as delivered by the event transport.
///
/// Bot-authored messages are filtered upstream; `is_bot` is carried for
/// collaborators that want to double-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
    pub plain_message: String,
    #[serde(default)]
    pub is_bot: bool,
}

/// The two per-guild language filter subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    StrongLanguage,
    LanguageFilter,
}

impl FilterKind {
    /// Wire name, as used in cache keys written by the admin surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrongLanguage => "strongLanguage",
            Self::LanguageFilter => "languageFilter",
        }
    }

    /// Cache key holding the per-guild feature flag.
    pub fn flag_key(&self, guild_id: &str) -> String {
        format!("guild-{guild_id}:feature:{}", self.as_str())
    }

    /// Cache key holding the per-guild serialized filter config.
    pub fn config_key(&self, guild_id: &str) -> String {
        format!("guild-{guild_id}:feature:{}Config", self.as_str())
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language codes a strong-language rule can target.
///
/// Only English is evaluated today. Codes this build does not know about
/// must still deserialize (as [`LanguageCode::Other`]) so one exotic rule
/// cannot invalidate a guild's whole config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "en")]
    En,
    #[serde(other)]
    Other,
}
