//! # lore-store
//!
//! Read-only access to the persisted corpus.
//!
//! ```text
//! <root>/
//! ├── hooks/              category
//! │   ├── v5/hooks.json   one or more collection files, any depth
//! │   └── v6/hooks.json
//! ├── errors/             error-pattern side collection
//! └── templates/
//! ```
//!
//! Collections are cached per category until [`KnowledgeStore::clear_cache`].

pub mod engine;
pub mod filter;
pub mod index;
pub mod loader;

pub use engine::KnowledgeStore;
pub use filter::{filter_by_category, filter_by_version};
pub use index::KnowledgeIndex;
pub use loader::LoadSummary;

use std::sync::Arc;

use lore_core::models::Record;

/// A loaded, immutable set of records shared by reference.
pub type Collection = Arc<Vec<Arc<Record>>>;
