//! Error taxonomy. One enum per subsystem, wrapped by [`LoreError`].

mod config_error;
mod embedding_error;
mod retrieval_error;
mod store_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

/// Top-level error for every Lore crate.
#[derive(Debug, thiserror::Error)]
pub enum LoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoreError {
    /// Whether retrying the same call later may succeed.
    ///
    /// Model initialization failures are retried on the next call, so they
    /// are the only transient class.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            LoreError::Embedding(EmbeddingError::ModelLoadFailed { .. })
                | LoreError::Retrieval(RetrievalError::SearchUnavailable { .. })
        )
    }
}

pub type LoreResult<T> = Result<T, LoreError>;
