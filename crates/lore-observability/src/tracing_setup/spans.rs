//! Span definitions per operation: search, troubleshoot, embedding, store load.

/// Create a documentation search span.
#[macro_export]
macro_rules! search_span {
    ($query:expr, $version:expr) => {
        tracing::info_span!("lore.search", query = %$query, version = ?$version)
    };
}

/// Create a troubleshooting span.
#[macro_export]
macro_rules! troubleshoot_span {
    ($error_text:expr) => {
        tracing::info_span!("lore.troubleshoot", error_len = $error_text.len())
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($model:expr, $dimensions:expr) => {
        tracing::info_span!("lore.embedding", model = %$model, dimensions = $dimensions)
    };
}

/// Create a corpus load span.
#[macro_export]
macro_rules! store_span {
    ($category:expr) => {
        tracing::debug_span!("lore.store", category = %$category)
    };
}

