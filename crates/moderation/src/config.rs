//! Per-guild filter configuration, in the JSON shape the admin surface
//! writes.
//!
//! This core only reads these documents: they are created and mutated
//! elsewhere, cached here with a bounded TTL, and consumed per message.

use {
    serde::{Deserialize, Serialize},
    serde_json::Value,
};

use modwarden_common::LanguageCode;

/// Message coordinates stamped into an action at dispatch time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// One moderation action in a chain.
///
/// The core stamps `message` and forwards the chain; action semantics and
/// the `payload` shape belong to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub action: String,
    #[serde(default)]
    pub message: MessageContext,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl ActionDescriptor {
    /// Fill in the message coordinates ahead of dispatch.
    pub fn stamp(&mut self, channel_id: &str, message_id: &str) {
        self.message.channel_id = Some(channel_id.to_string());
        self.message.message_id = Some(message_id.to_string());
    }
}

/// `strongLanguage` config: per-language rules over the built-in
/// strong-language libraries, sharing one action chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongLanguageConfig {
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub languages: Vec<StrongLanguageRule>,
    #[serde(default)]
    pub actions: Vec<ActionDescriptor>,
}

/// One strong-language rule. The target library is implied by the
/// language code; only the whitelist is guild-configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrongLanguageRule {
    pub language: LanguageCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist_lib: Option<String>,
}

/// `languageFilter` config: guild-chosen target libraries, one action
/// chain per rule group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageFilterConfig {
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub rules: Vec<FilterRule>,
}

/// One language-filter rule group: target library, optional whitelist,
/// and the actions to fire on detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRule {
    pub library_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist_lib: Option<String>,
    #[serde(default)]
    pub actions: Vec<ActionDescriptor>,
}
