//! Multi-tenant language moderation core.
//!
//! Matches inbound guild messages against configurable phrase libraries,
//! excludes whitelisted phrases, and forwards the surviving rule groups'
//! action chains to an external dispatcher. Configuration is resolved
//! cache-first with negative caching and a bounded TTL, so the per-message
//! hot path stays off the persistent store.

pub mod cache;
pub mod config;
pub mod detect;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod library;
pub mod resolver;
pub mod store;

pub use {
    cache::{Cache, MemoryCache},
    config::{
        ActionDescriptor, FilterRule, LanguageFilterConfig, MessageContext, StrongLanguageConfig,
        StrongLanguageRule,
    },
    detect::Detector,
    dispatch::{ActionDispatcher, DispatchOutcome, DispatchQueue},
    error::{Error, Result},
    filter::LanguageFilter,
    library::{PhraseLibraryStore, STRONG_LANGUAGE_EN, StaticLibraryStore},
    resolver::{CONFIG_TTL, ConfigResolver},
    store::{FeatureStore, LanguageFeatures},
};
