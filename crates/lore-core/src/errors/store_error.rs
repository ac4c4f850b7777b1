/// Corpus loading errors.
///
/// Most of these never reach a caller: a bad file or entry is logged and
/// skipped. They surface only from the lower-level parsing functions.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("malformed corpus file {path}: {reason}")]
    MalformedFile { path: String, reason: String },

    #[error("malformed entry {index} in {path}: {reason}")]
    MalformedEntry {
        path: String,
        index: usize,
        reason: String,
    },

    #[error("corpus root not found: {path}")]
    RootNotFound { path: String },
}
