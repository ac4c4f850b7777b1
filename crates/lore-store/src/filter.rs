//! Collection views. Both preserve input order.

use std::sync::Arc;

use lore_core::models::{Record, VersionFilter};

/// Records admitted by `filter`. `All`-tagged records pass every concrete filter.
pub fn filter_by_version(records: &[Arc<Record>], filter: &VersionFilter) -> Vec<Arc<Record>> {
    records
        .iter()
        .filter(|r| filter.matches(&r.version))
        .cloned()
        .collect()
}

/// Records whose category equals `category` exactly.
pub fn filter_by_category(records: &[Arc<Record>], category: &str) -> Vec<Arc<Record>> {
    records
        .iter()
        .filter(|r| r.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::models::Version;

    fn rec(id: &str, version: Version, category: &str) -> Arc<Record> {
        let mut r = Record::new(id, id, "body", version);
        r.category = category.to_string();
        Arc::new(r)
    }

    #[test]
    fn version_filter_keeps_order_and_all_sentinel() {
        let records = vec![
            rec("a", Version::V5, "hooks"),
            rec("b", Version::V6, "hooks"),
            rec("c", Version::All, "hooks"),
            rec("d", Version::V5, "auth"),
        ];
        let ids: Vec<_> = filter_by_version(&records, &VersionFilter::Only(Version::V5))
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
        assert_eq!(filter_by_version(&records, &VersionFilter::All).len(), 4);
    }

    #[test]
    fn category_filter_is_exact() {
        let records = vec![rec("a", Version::V5, "hooks"), rec("b", Version::V5, "Hooks")];
        let hits = filter_by_category(&records, "hooks");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }
}
