/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search temporarily unavailable: {reason}")]
    SearchUnavailable { reason: String },
}
