//! Shared types for the modwarden moderation core.

pub mod types;

pub use types::{ChatMessage, FilterKind, LanguageCode};
