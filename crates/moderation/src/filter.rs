//! The per-message language-filter pipeline.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use modwarden_common::{ChatMessage, FilterKind};

use crate::{
    cache::Cache,
    config::ActionDescriptor,
    detect::Detector,
    dispatch::DispatchQueue,
    error::Result,
    library::{self, PhraseLibraryStore},
    resolver::ConfigResolver,
    store::FeatureStore,
};

/// Stateless per-message moderation pipeline.
///
/// Both filter branches are gated twice: by the guild's feature flag in
/// the cache and by the config's `is_active`. Branches evaluate
/// independently; a failure in one never stops the other, and a failing
/// rule group never stops its siblings.
pub struct LanguageFilter {
    cache: Arc<dyn Cache>,
    resolver: ConfigResolver,
    detector: Detector,
    dispatch: DispatchQueue,
}

impl LanguageFilter {
    pub fn new(
        cache: Arc<dyn Cache>,
        store: Arc<dyn FeatureStore>,
        libraries: Arc<dyn PhraseLibraryStore>,
        dispatch: DispatchQueue,
    ) -> Self {
        Self {
            resolver: ConfigResolver::new(Arc::clone(&cache), store),
            detector: Detector::new(libraries),
            cache,
            dispatch,
        }
    }

    /// Evaluate one inbound message.
    ///
    /// Never returns an error: every failure is logged and scoped to its
    /// branch or rule group, so the event transport has nothing to handle.
    #[instrument(
        skip(self, message),
        fields(guild = %message.guild_id, message_id = %message.message_id)
    )]
    pub async fn process_message(&self, message: &ChatMessage) {
        if self
            .flag_enabled(&message.guild_id, FilterKind::StrongLanguage)
            .await
        {
            if let Err(err) = self.strong_language(message).await {
                warn!(error = %err, "strong-language branch aborted");
            }
        }

        if self
            .flag_enabled(&message.guild_id, FilterKind::LanguageFilter)
            .await
        {
            if let Err(err) = self.language_filter(message).await {
                warn!(error = %err, "language-filter branch aborted");
            }
        }
    }

    /// A flag is enabled iff the cache holds a non-empty value other than
    /// `"false"`/`"0"`. Cache trouble counts as disabled.
    async fn flag_enabled(&self, guild_id: &str, kind: FilterKind) -> bool {
        let key = kind.flag_key(guild_id);
        match self.cache.get(&key).await {
            Ok(Some(value)) => !value.is_empty() && value != "false" && value != "0",
            Ok(None) => false,
            Err(err) => {
                warn!(%key, error = %err, "feature flag read failed, treating as disabled");
                false
            },
        }
    }

    async fn strong_language(&self, message: &ChatMessage) -> Result<()> {
        let Some(config) = self.resolver.strong_language(&message.guild_id).await? else {
            debug!("no strong-language config");
            return Ok(());
        };
        if !config.is_active {
            debug!("strong-language config inactive");
            return Ok(());
        }

        for rule in &config.languages {
            // Only English ships a built-in library today.
            let Some(target) = library::strong_language_library(rule.language) else {
                continue;
            };
            match self
                .detector
                .match_with_whitelist(
                    &message.plain_message,
                    target,
                    rule.whitelist_lib.as_deref(),
                )
                .await
            {
                Ok(result) if result.detected => {
                    debug!(library = target, hits = result.texts.len(), "strong language detected");
                    self.forward(config.actions.clone(), message);
                },
                Ok(_) => {},
                // Fail open: a bad library id must not disrupt chat.
                Err(err) => warn!(library = target, error = %err, "strong-language rule skipped"),
            }
        }
        Ok(())
    }

    async fn language_filter(&self, message: &ChatMessage) -> Result<()> {
        let Some(config) = self.resolver.language_filter(&message.guild_id).await? else {
            debug!("no language-filter config");
            return Ok(());
        };
        if !config.is_active {
            debug!("language-filter config inactive");
            return Ok(());
        }

        for rule in &config.rules {
            match self
                .detector
                .match_with_whitelist(
                    &message.plain_message,
                    &rule.library_id,
                    rule.whitelist_lib.as_deref(),
                )
                .await
            {
                Ok(result) if result.detected => {
                    debug!(
                        library = %rule.library_id,
                        hits = result.texts.len(),
                        "filtered language detected"
                    );
                    self.forward(rule.actions.clone(), message);
                },
                Ok(_) => {},
                Err(err) => {
                    warn!(library = %rule.library_id, error = %err, "language-filter rule skipped");
                },
            }
        }
        Ok(())
    }

    fn forward(&self, mut chain: Vec<ActionDescriptor>, message: &ChatMessage) {
        for action in &mut chain {
            action.stamp(&message.channel_id, &message.message_id);
        }
        self.dispatch.submit(chain);
    }
}
