//! ONNX Runtime embedding provider.
//!
//! Loads a sentence-embedding model via `ort` and its `tokenizer.json` via
//! `tokenizers`. Token-level output is pooled per the configured [`Pooling`]
//! and optionally L2-normalized.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lore_core::config::{EmbeddingConfig, Pooling};
use lore_core::errors::EmbeddingError;
use lore_core::traits::EmbeddingProvider;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use crate::pooling::{l2_normalize, pool};

const TOKENIZER_JSON: &str = "tokenizer.json";

pub struct OnnxProvider {
    /// `Session::run` takes `&mut self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    model_id: String,
    dimensions: usize,
    pooling: Pooling,
    normalize: bool,
    max_sequence_length: usize,
}

impl OnnxProvider {
    /// Load the model and tokenizer named by `config`.
    ///
    /// The tokenizer defaults to `tokenizer.json` next to the model file.
    pub fn load(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let failed = |reason: String| EmbeddingError::ModelLoadFailed {
            model: config.model_id.clone(),
            reason,
        };

        let model_path = config
            .model_path
            .as_deref()
            .ok_or_else(|| failed("embedding.model_path is not set".to_string()))?;
        let model_path = Path::new(model_path);
        if !model_path.is_file() {
            return Err(failed(format!("model file not found: {}", model_path.display())));
        }
        let tokenizer_path = config
            .tokenizer_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| model_path.with_file_name(TOKENIZER_JSON));
        if !tokenizer_path.is_file() {
            return Err(failed(format!(
                "tokenizer not found: {}",
                tokenizer_path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| failed(e.to_string()))?
            .with_intra_threads(config.intra_threads.max(1))
            .map_err(|e| failed(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| failed(e.to_string()))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| failed(format!("tokenizer load failed: {e}")))?;

        debug!(
            model = %config.model_id,
            dims = config.dimensions,
            pooling = config.pooling.as_str(),
            "ONNX model loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            model_id: config.model_id.clone(),
            dimensions: config.dimensions,
            pooling: config.pooling,
            normalize: config.normalize,
            max_sequence_length: config.max_sequence_length.max(1),
        })
    }

    fn infer(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tokenization failed: {e}"),
                })?;

        let len = encoding.get_ids().len().min(self.max_sequence_length);
        let to_i64 = |xs: &[u32]| -> Vec<i64> { xs[..len].iter().map(|&x| i64::from(x)).collect() };
        let input_ids = to_i64(encoding.get_ids());
        let attention_mask = to_i64(encoding.get_attention_mask());
        let token_type_ids = to_i64(encoding.get_type_ids());

        let shape = vec![1i64, len as i64];
        let tensor = |data: Vec<i64>| {
            Tensor::from_array((shape.clone(), data)).map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })
        };
        let ids_tensor = tensor(input_ids)?;
        let mask_tensor = tensor(attention_mask.clone())?;
        let type_tensor = tensor(token_type_ids)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(ort::inputs! {
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            })
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let mut embedding = match shape.len() {
            // [batch=1, seq, dims]
            3 => pool(
                data,
                shape[1] as usize,
                shape[2] as usize,
                &attention_mask,
                self.pooling,
            ),
            // [batch=1, dims]: the model pools internally.
            2 => data[..shape[1] as usize].to_vec(),
            _ => {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("unexpected output shape: {shape:?}"),
                })
            }
        };

        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            });
        }
        if self.normalize {
            l2_normalize(&mut embedding);
        }
        Ok(embedding)
    }
}

impl EmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.infer(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_id
    }
}
