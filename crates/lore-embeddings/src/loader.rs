//! Model construction, run once by the engine on a blocking thread.

use std::sync::Arc;

use lore_core::config::EmbeddingConfig;
use lore_core::errors::EmbeddingError;
use lore_core::traits::EmbeddingProvider;

use crate::providers::{OnnxProvider, TfIdfFallback};

/// Builds the embedding provider. May block on file I/O and model setup.
pub trait ModelLoader: Send + Sync + 'static {
    fn load(&self) -> Result<Arc<dyn EmbeddingProvider>, EmbeddingError>;

    /// Model identifier used in logs and errors.
    fn model_id(&self) -> &str;
}

pub struct OnnxLoader {
    config: EmbeddingConfig,
}

impl OnnxLoader {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self { config }
    }
}

impl ModelLoader for OnnxLoader {
    fn load(&self) -> Result<Arc<dyn EmbeddingProvider>, EmbeddingError> {
        Ok(Arc::new(OnnxProvider::load(&self.config)?))
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }
}

pub struct TfIdfLoader {
    model_id: String,
    dimensions: usize,
}

impl TfIdfLoader {
    pub fn new(model_id: impl Into<String>, dimensions: usize) -> Self {
        Self {
            model_id: model_id.into(),
            dimensions,
        }
    }
}

impl ModelLoader for TfIdfLoader {
    fn load(&self) -> Result<Arc<dyn EmbeddingProvider>, EmbeddingError> {
        Ok(Arc::new(TfIdfFallback::new(self.dimensions)))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Loader for the configured provider (`"onnx"` or `"tfidf"`).
pub fn create_loader(config: &EmbeddingConfig) -> Result<Arc<dyn ModelLoader>, EmbeddingError> {
    match config.provider.as_str() {
        "onnx" => Ok(Arc::new(OnnxLoader::new(config.clone()))),
        "tfidf" => Ok(Arc::new(TfIdfLoader::new(
            config.model_id.clone(),
            config.dimensions,
        ))),
        other => Err(EmbeddingError::ProviderUnavailable {
            provider: other.to_string(),
        }),
    }
}
