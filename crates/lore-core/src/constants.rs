/// Lore system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File extension of persisted corpus collections.
pub const CORPUS_FILE_EXTENSION: &str = "json";

/// Upper bound on the compiled size of a record-supplied regex pattern.
pub const MAX_PATTERN_SIZE_BYTES: usize = 1 << 20;

/// Score assigned to the top hit after rescaling.
pub const TOP_SCORE: f64 = 1.0;
