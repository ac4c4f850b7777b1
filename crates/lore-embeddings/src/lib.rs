//! # lore-embeddings
//!
//! Query embedding for vector ranking. The model is loaded lazily, once per
//! engine, and every concurrent caller awaits the same initialization.
//!
//! Pooling and normalization must match the settings that produced the
//! corpus's stored vectors. A mismatch does not raise an error; it only
//! makes rankings worse.

pub mod engine;
pub mod loader;
pub mod pooling;
pub mod providers;
pub mod query_cache;

pub use engine::EmbeddingEngine;
pub use loader::{create_loader, ModelLoader, OnnxLoader, TfIdfLoader};
pub use providers::{OnnxProvider, TfIdfFallback};
pub use query_cache::QueryCache;
