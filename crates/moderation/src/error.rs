use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The persistent store could not be reached while resolving a guild's
    /// filter config. Aborts the calling branch only.
    #[error("config fetch: {0}")]
    ConfigFetch(#[source] anyhow::Error),

    /// The phrase library store failed.
    #[error("library fetch: {0}")]
    Library(#[source] anyhow::Error),

    /// No phrase library is registered under this id. The orchestrator
    /// fails open per rule group on this.
    #[error("phrase library not found: {0}")]
    LibraryNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
