//! Configuration for every subsystem, loadable from TOML with per-field defaults.

pub mod defaults;
mod embedding_config;
mod observability_config;
mod retrieval_config;
mod store_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LoreResult};

pub use embedding_config::{EmbeddingConfig, Pooling};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::{RankingMode, RetrievalConfig};
pub use store_config::StoreConfig;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoreConfig {
    pub store: StoreConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl LoreConfig {
    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(source: &str) -> LoreResult<Self> {
        let config: LoreConfig = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> LoreResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// Reject values the rankers cannot work with.
    pub fn validate(&self) -> LoreResult<()> {
        self.retrieval.validate()?;
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "embedding.dimensions".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
