use std::collections::BTreeMap;
use std::sync::Arc;

use lore_core::models::{Record, VersionFilter};

use crate::filter::filter_by_version;
use crate::Collection;

/// Every documentation category plus the three side collections.
///
/// Always well-formed: a side collection whose category is absent from the
/// corpus is empty, never missing.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeIndex {
    pub by_category: BTreeMap<String, Collection>,
    pub error_patterns: Collection,
    pub best_practices: Collection,
    pub templates: Collection,
}

impl KnowledgeIndex {
    /// Documentation records across all categories, in category order.
    pub fn documents(&self) -> impl Iterator<Item = &Arc<Record>> {
        self.by_category.values().flat_map(|c| c.iter())
    }

    /// Documentation candidates for one query.
    pub fn candidates(&self, category: Option<&str>, version: &VersionFilter) -> Vec<Arc<Record>> {
        match category {
            Some(category) => self
                .by_category
                .get(category)
                .map(|c| filter_by_version(c, version))
                .unwrap_or_default(),
            None => self
                .documents()
                .filter(|r| version.matches(&r.version))
                .cloned()
                .collect(),
        }
    }

    /// Error-pattern records admitted by `version`.
    pub fn error_patterns_for(&self, version: &VersionFilter) -> Vec<Arc<Record>> {
        filter_by_version(&self.error_patterns, version)
    }

    pub fn document_count(&self) -> usize {
        self.by_category.values().map(|c| c.len()).sum()
    }
}
