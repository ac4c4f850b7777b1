// Single source of truth for all default values.

// --- Store ---
pub const DEFAULT_CORPUS_ROOT: &str = "knowledge-base";
pub const DEFAULT_ERROR_PATTERNS_CATEGORY: &str = "errors";
pub const DEFAULT_BEST_PRACTICES_CATEGORY: &str = "best-practices";
pub const DEFAULT_TEMPLATES_CATEGORY: &str = "templates";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "onnx";
pub const DEFAULT_EMBEDDING_MODEL_ID: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_NORMALIZE: bool = true;
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 256;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_000;
pub const DEFAULT_INTRA_THREADS: usize = 2;

// --- Retrieval ---
pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_SEARCH_MIN_SCORE: f64 = 0.25;
pub const DEFAULT_TROUBLESHOOT_MIN_SCORE: f64 = 0.1;
pub const DEFAULT_TROUBLESHOOT_LIMIT: usize = 3;
pub const DEFAULT_EXPLAIN_LIMIT: usize = 5;
pub const DEFAULT_DEDUP_CAP: usize = 2;
pub const DEFAULT_BM25_K1: f64 = 1.5;
pub const DEFAULT_BM25_B: f64 = 0.75;
pub const DEFAULT_SNIPPET_CHARS: usize = 240;
pub const DEFAULT_LEXICAL_FALLBACK: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 10_000;
