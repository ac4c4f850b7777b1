//! # lore-core
//!
//! Foundation crate for the Lore knowledge-retrieval service.
//! Defines the record model, configuration, error taxonomy, and the provider
//! traits the retrieval core is wired through. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LoreConfig;
pub use errors::{LoreError, LoreResult};
pub use models::{RankedHit, Record, ScoredResult, Version, VersionFilter};
