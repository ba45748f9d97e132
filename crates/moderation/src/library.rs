//! Phrase library collaborator and the built-in strong-language library
//! ids.

use std::collections::HashMap;

use {anyhow::Result, async_trait::async_trait};

use modwarden_common::LanguageCode;

/// Library id of the built-in English strong-language phrase set.
pub const STRONG_LANGUAGE_EN: &str = "strong-language-en";

/// Built-in strong-language library id for a language code, if one ships.
pub fn strong_language_library(code: LanguageCode) -> Option<&'static str> {
    match code {
        LanguageCode::En => Some(STRONG_LANGUAGE_EN),
        LanguageCode::Other => None,
    }
}

/// Resolves phrase libraries by id.
///
/// Libraries are resolved on every detection call; a library is immutable
/// for the duration of one call but may change between calls.
#[async_trait]
pub trait PhraseLibraryStore: Send + Sync {
    /// Ordered phrases for a library, or `None` for an unknown id.
    async fn resolve(&self, library_id: &str) -> Result<Option<Vec<String>>>;
}

/// Immutable in-process library store.
#[derive(Debug, Default)]
pub struct StaticLibraryStore {
    libraries: HashMap<String, Vec<String>>,
}

impl StaticLibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_library(mut self, id: impl Into<String>, phrases: Vec<String>) -> Self {
        self.libraries.insert(id.into(), phrases);
        self
    }
}

#[async_trait]
impl PhraseLibraryStore for StaticLibraryStore {
    async fn resolve(&self, library_id: &str) -> Result<Option<Vec<String>>> {
        Ok(self.libraries.get(library_id).cloned())
    }
}
