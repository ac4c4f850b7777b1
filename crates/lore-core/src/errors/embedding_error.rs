/// Embedding subsystem errors.
///
/// `Clone` so that one failed model initialization can be handed to every
/// caller that was waiting on it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmbeddingError {
    #[error("model load failed: {model}: {reason}")]
    ModelLoadFailed { model: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },
}
