use serde::{Deserialize, Serialize};

use super::defaults;

/// How token-level model output is reduced to one vector.
///
/// Must match the setting that produced the corpus's stored embeddings.
/// A mismatch does not fail; it quietly degrades ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pooling {
    /// Attention-masked mean over all token vectors.
    #[default]
    Mean,
    /// The first (`[CLS]`) token vector.
    Cls,
}

impl Pooling {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pooling::Mean => "mean",
            Pooling::Cls => "cls",
        }
    }
}

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "onnx" or "tfidf".
    pub provider: String,
    /// Model identifier. Stored embeddings tagged with another id are not compared.
    pub model_id: String,
    /// Path to the ONNX model file.
    pub model_path: Option<String>,
    /// Path to the `tokenizer.json` matching the model.
    pub tokenizer_path: Option<String>,
    /// Output dimensions.
    pub dimensions: usize,
    pub pooling: Pooling,
    /// L2-normalize the pooled vector.
    pub normalize: bool,
    /// Text prepended to every query before embedding.
    pub query_prefix: String,
    /// Token limit per input; longer inputs are truncated.
    pub max_sequence_length: usize,
    /// Max cached query embeddings.
    pub query_cache_size: u64,
    /// ONNX intra-op thread count.
    pub intra_threads: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model_id: defaults::DEFAULT_EMBEDDING_MODEL_ID.to_string(),
            model_path: None,
            tokenizer_path: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            pooling: Pooling::default(),
            normalize: defaults::DEFAULT_NORMALIZE,
            query_prefix: String::new(),
            max_sequence_length: defaults::DEFAULT_MAX_SEQUENCE_LENGTH,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
        }
    }
}
