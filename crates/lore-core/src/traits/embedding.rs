use async_trait::async_trait;

use crate::errors::{EmbeddingError, LoreResult};
use crate::models::EmbeddingScheme;

/// A loaded embedding model.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Dimensionality of produced vectors.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}

/// Turns a query into a vector comparable with stored record embeddings.
#[async_trait]
pub trait QueryEmbedder: Send + Sync {
    async fn embed_query(&self, query: &str) -> LoreResult<Vec<f32>>;

    /// The scheme query vectors are produced under.
    fn scheme(&self) -> &EmbeddingScheme;
}
