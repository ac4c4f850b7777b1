//! Structured log events for contained failures and key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// A corpus file could not be read or parsed and was skipped.
pub fn corpus_file_skipped(path: &str, reason: &str) {
    tracing::warn!(
        event = "corpus_file_skipped",
        path = %path,
        reason = %reason,
        "corpus file skipped"
    );
}

/// A single entry inside a corpus file was malformed and was skipped.
pub fn corpus_entry_skipped(path: &str, index: usize, reason: &str) {
    tracing::warn!(
        event = "corpus_entry_skipped",
        path = %path,
        index = index,
        reason = %reason,
        "corpus entry skipped"
    );
}

/// A category finished loading.
pub fn category_loaded(category: &str, records: usize, files: usize, skipped_files: usize) {
    tracing::info!(
        event = "category_loaded",
        category = %category,
        records = records,
        files = files,
        skipped_files = skipped_files,
        "category loaded"
    );
}

/// Embedded records in one collection disagree on dimensionality.
pub fn dimension_conflict(category: &str, expected: usize, conflicting: usize) {
    tracing::warn!(
        event = "dimension_conflict",
        category = %category,
        expected = expected,
        conflicting = conflicting,
        "embedded records disagree on dimensionality"
    );
}

/// A record's troubleshooting pattern failed to compile.
pub fn pattern_rejected(record_id: &str, reason: &str) {
    tracing::warn!(
        event = "pattern_rejected",
        record_id = %record_id,
        reason = %reason,
        "invalid error pattern skipped"
    );
}

/// Candidates were excluded from vector ranking.
pub fn candidates_excluded(scheme_mismatch: usize, dimension_mismatch: usize) {
    tracing::warn!(
        event = "candidates_excluded",
        scheme_mismatch = scheme_mismatch,
        dimension_mismatch = dimension_mismatch,
        "candidates excluded from vector ranking"
    );
}

/// The embedding model finished loading.
pub fn model_loaded(model: &str, dimensions: usize) {
    tracing::info!(
        event = "model_loaded",
        model = %model,
        dimensions = dimensions,
        "embedding model loaded"
    );
}

/// The embedding model failed to load. The next call retries.
pub fn model_load_failed(model: &str, reason: &str) {
    tracing::error!(
        event = "model_load_failed",
        model = %model,
        reason = %reason,
        "embedding model failed to load"
    );
}

/// Cached corpus collections were dropped.
pub fn cache_cleared(collections: usize) {
    tracing::info!(
        event = "cache_cleared",
        collections = collections,
        "corpus cache cleared"
    );
}

/// A component switched to its fallback path.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
