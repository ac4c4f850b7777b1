use serde::{Deserialize, Serialize};

use crate::config::{EmbeddingConfig, Pooling};

/// Identifies how a set of embeddings was produced.
///
/// Vectors from different schemes are not comparable even when their
/// dimensions agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingScheme {
    pub model_id: String,
    pub pooling: Pooling,
    pub normalized: bool,
    pub dimensions: usize,
}

impl EmbeddingScheme {
    /// Whether a stored vector tagged with `model_tag` may be compared
    /// against query vectors of this scheme. Untagged vectors are assumed
    /// to match.
    pub fn accepts(&self, model_tag: Option<&str>) -> bool {
        match model_tag {
            None => true,
            Some(tag) => tag.eq_ignore_ascii_case(&self.model_id),
        }
    }
}

impl From<&EmbeddingConfig> for EmbeddingScheme {
    fn from(config: &EmbeddingConfig) -> Self {
        Self {
            model_id: config.model_id.clone(),
            pooling: config.pooling,
            normalized: config.normalize,
            dimensions: config.dimensions,
        }
    }
}
