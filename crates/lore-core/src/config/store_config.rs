use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding one subdirectory per category.
    pub root: String,
    /// Category whose records carry error `pattern`s for troubleshooting.
    pub error_patterns_category: String,
    /// Category surfaced as the best-practices side collection.
    pub best_practices_category: String,
    /// Category surfaced as the templates side collection.
    pub templates_category: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: defaults::DEFAULT_CORPUS_ROOT.to_string(),
            error_patterns_category: defaults::DEFAULT_ERROR_PATTERNS_CATEGORY.to_string(),
            best_practices_category: defaults::DEFAULT_BEST_PRACTICES_CATEGORY.to_string(),
            templates_category: defaults::DEFAULT_TEMPLATES_CATEGORY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Whether `category` is one of the side collections rather than documentation.
    pub fn is_side_collection(&self, category: &str) -> bool {
        category == self.error_patterns_category
            || category == self.best_practices_category
            || category == self.templates_category
    }
}
