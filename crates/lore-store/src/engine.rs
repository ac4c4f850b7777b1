//! KnowledgeStore: cached, read-only access to the corpus.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use dashmap::DashMap;
use lore_core::config::StoreConfig;
use lore_core::errors::{LoreResult, StoreError};
use lore_observability::events;
use tracing::{debug, info};

use crate::index::KnowledgeIndex;
use crate::loader;
use crate::Collection;

/// Per-category collection cache over a corpus root.
///
/// The first `load` of a category reads it from disk; concurrent callers for
/// the same category wait on that one read and receive the same collection.
pub struct KnowledgeStore {
    root: PathBuf,
    config: StoreConfig,
    collections: DashMap<String, Arc<OnceLock<Collection>>>,
    index: Mutex<IndexMemo>,
}

/// Memoized index plus a counter bumped by every `clear_cache`, so a build
/// that raced a clear is not stored.
#[derive(Default)]
struct IndexMemo {
    index: Option<Arc<KnowledgeIndex>>,
    generation: u64,
}

impl KnowledgeStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root),
            config,
            collections: DashMap::new(),
            index: Mutex::new(IndexMemo::default()),
        }
    }

    /// Like [`KnowledgeStore::new`], but fails when the root directory is missing.
    pub fn open(config: StoreConfig) -> LoreResult<Self> {
        if !Path::new(&config.root).is_dir() {
            return Err(StoreError::RootNotFound {
                path: config.root.clone(),
            }
            .into());
        }
        Ok(Self::new(config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// All records of `category`, in sorted file order then in-file order.
    ///
    /// Returns the cached collection after the first call. An unknown
    /// category yields an empty collection.
    pub fn load(&self, category: &str) -> Collection {
        let _span = lore_observability::store_span!(category).entered();
        self.cached(category.to_string(), || {
            let (records, summary) = loader::load_category(&self.root, category);
            debug!(category, ?summary, "category read from disk");
            records
        })
    }

    /// Records from the single file `<root>/<category>/<file>`.
    pub fn load_file(&self, category: &str, file: &str) -> Collection {
        let key = format!("{category}/{file}");
        self.cached(key, || loader::load_single(&self.root, category, file).0)
    }

    fn cached(
        &self,
        key: String,
        read: impl FnOnce() -> Vec<Arc<lore_core::models::Record>>,
    ) -> Collection {
        // Clone the cell out so the shard lock is not held across disk I/O.
        let cell = self
            .collections
            .entry(key)
            .or_insert_with(|| Arc::new(OnceLock::new()))
            .value()
            .clone();
        cell.get_or_init(|| Arc::new(read())).clone()
    }

    /// Category directory names under the root, sorted.
    pub fn categories(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .filter(|name| !name.starts_with('.'))
            .collect();
        names.sort();
        names
    }

    /// Load every category and assemble the index. Memoized until
    /// [`KnowledgeStore::clear_cache`].
    ///
    /// The memo lock is not held while categories are read from disk.
    /// Concurrent cold builds share the per-category reads, and all callers
    /// get the first index stored.
    pub fn build_index(&self) -> Arc<KnowledgeIndex> {
        let generation = {
            let memo = self.lock_index();
            if let Some(index) = &memo.index {
                return Arc::clone(index);
            }
            memo.generation
        };

        let index = Arc::new(self.assemble_index());

        let mut memo = self.lock_index();
        if memo.generation != generation {
            debug!("cache cleared during index build, not memoizing");
            return index;
        }
        match &memo.index {
            Some(existing) => Arc::clone(existing),
            None => {
                memo.index = Some(Arc::clone(&index));
                index
            }
        }
    }

    /// The memoized index, if one has been built since the last clear.
    pub fn cached_index(&self) -> Option<Arc<KnowledgeIndex>> {
        self.lock_index().index.clone()
    }

    fn assemble_index(&self) -> KnowledgeIndex {
        let mut index = KnowledgeIndex {
            error_patterns: self.load(&self.config.error_patterns_category),
            best_practices: self.load(&self.config.best_practices_category),
            templates: self.load(&self.config.templates_category),
            ..KnowledgeIndex::default()
        };
        for category in self.categories() {
            if self.config.is_side_collection(&category) {
                continue;
            }
            let collection = self.load(&category);
            index.by_category.insert(category, collection);
        }
        info!(
            categories = index.by_category.len(),
            documents = index.document_count(),
            error_patterns = index.error_patterns.len(),
            "knowledge index built"
        );
        index
    }

    /// Drop every cached collection and the memoized index. The next access
    /// re-reads from disk.
    pub fn clear_cache(&self) {
        let mut memo = self.lock_index();
        let collections = self.collections.len();
        self.collections.clear();
        memo.index = None;
        memo.generation += 1;
        events::cache_cleared(collections);
    }

    /// Number of cached collections (categories and single files).
    pub fn cached_collections(&self) -> usize {
        self.collections.len()
    }

    fn lock_index(&self) -> MutexGuard<'_, IndexMemo> {
        self.index.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
