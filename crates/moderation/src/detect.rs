//! Library-backed detection with whitelist exclusion.

use std::sync::Arc;

use tracing::{debug, instrument};

use modwarden_matcher::{MatchResult, match_phrases};

use crate::{
    error::{Error, Result},
    library::PhraseLibraryStore,
};

/// Runs phrase detection against stored libraries.
pub struct Detector {
    libraries: Arc<dyn PhraseLibraryStore>,
}

impl Detector {
    pub fn new(libraries: Arc<dyn PhraseLibraryStore>) -> Self {
        Self { libraries }
    }

    /// Match `text` against `target_lib`, then drop every phrase the
    /// whitelist library also matches in the same text.
    ///
    /// Removal is by value: one whitelisted phrase removes all of its
    /// occurrences from the target result.
    #[instrument(skip(self, text))]
    pub async fn match_with_whitelist(
        &self,
        text: &str,
        target_lib: &str,
        whitelist_lib: Option<&str>,
    ) -> Result<MatchResult> {
        let target = self.load(target_lib).await?;
        let result = match_phrases(text, &target);

        let Some(whitelist_id) = whitelist_lib else {
            return Ok(result);
        };
        let whitelist = self.load(whitelist_id).await?;
        let exempt = match_phrases(text, &whitelist);

        let texts: Vec<String> = result
            .texts
            .into_iter()
            .filter(|t| !exempt.texts.contains(t))
            .collect();
        debug!(target = target_lib, hits = texts.len(), "detection complete");
        Ok(MatchResult::from_texts(texts))
    }

    async fn load(&self, library_id: &str) -> Result<Vec<String>> {
        self.libraries
            .resolve(library_id)
            .await
            .map_err(Error::Library)?
            .ok_or_else(|| Error::LibraryNotFound(library_id.to_string()))
    }
}
