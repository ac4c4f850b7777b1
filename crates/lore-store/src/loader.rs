//! Corpus file parsing with per-file and per-entry quarantine.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use lore_core::constants::CORPUS_FILE_EXTENSION;
use lore_core::errors::StoreError;
use lore_core::models::Record;
use lore_observability::events;
use serde_json::{Map, Value};
use walkdir::WalkDir;

/// Counters for one category load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files_read: usize,
    pub files_skipped: usize,
    pub entries_skipped: usize,
    pub dimension_conflicts: usize,
}

/// Records parsed from one file, plus how many entries were quarantined.
#[derive(Debug)]
pub struct ParsedFile {
    pub records: Vec<Record>,
    pub entries_skipped: usize,
}

/// Load every collection file under `<root>/<category>`, in sorted path order.
///
/// A missing category directory yields no records. Unreadable or malformed
/// files are skipped with a warning.
pub fn load_category(root: &Path, category: &str) -> (Vec<Arc<Record>>, LoadSummary) {
    let mut summary = LoadSummary::default();
    if !is_contained(category) {
        events::corpus_file_skipped(category, "category escapes the corpus root");
        summary.files_skipped = 1;
        return (Vec::new(), summary);
    }
    let dir = root.join(category);
    if !dir.is_dir() {
        return (Vec::new(), summary);
    }

    let mut records = Vec::new();
    for path in collection_files(&dir) {
        let rel = relative_display(root, &path);
        match parse_file(&path, &rel, category) {
            Ok(parsed) => {
                summary.files_read += 1;
                summary.entries_skipped += parsed.entries_skipped;
                records.extend(parsed.records.into_iter().map(Arc::new));
            }
            Err(e) => {
                summary.files_skipped += 1;
                events::corpus_file_skipped(&rel, &e.to_string());
            }
        }
    }

    summary.dimension_conflicts = check_dimensions(category, &records);
    events::category_loaded(category, records.len(), summary.files_read, summary.files_skipped);
    (records, summary)
}

/// Load a single collection file `<root>/<category>/<file>`.
pub fn load_single(root: &Path, category: &str, file: &str) -> (Vec<Arc<Record>>, LoadSummary) {
    let mut summary = LoadSummary::default();
    if !is_contained(category) || !is_contained(file) {
        events::corpus_file_skipped(file, "path escapes the category directory");
        summary.files_skipped = 1;
        return (Vec::new(), summary);
    }

    let path = root.join(category).join(file);
    if !path.is_file() {
        return (Vec::new(), summary);
    }

    let rel = relative_display(root, &path);
    match parse_file(&path, &rel, category) {
        Ok(parsed) => {
            summary.files_read = 1;
            summary.entries_skipped = parsed.entries_skipped;
            let records: Vec<Arc<Record>> = parsed.records.into_iter().map(Arc::new).collect();
            summary.dimension_conflicts = check_dimensions(category, &records);
            (records, summary)
        }
        Err(e) => {
            summary.files_skipped = 1;
            events::corpus_file_skipped(&rel, &e.to_string());
            (Vec::new(), summary)
        }
    }
}

/// Parse one collection file.
///
/// Accepts a bare JSON array of entries, or an object with a `records` array
/// and optional file-level `version` / `category` defaults. Entries that do
/// not deserialize are skipped individually.
pub fn parse_file(path: &Path, rel: &str, category: &str) -> Result<ParsedFile, StoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| StoreError::ReadFailed {
        path: rel.to_string(),
        reason: e.to_string(),
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| StoreError::MalformedFile {
        path: rel.to_string(),
        reason: e.to_string(),
    })?;

    let (entries, file_defaults) = match value {
        Value::Array(entries) => (entries, Map::new()),
        Value::Object(mut obj) => match obj.remove("records") {
            Some(Value::Array(entries)) => (entries, obj),
            _ => {
                return Err(StoreError::MalformedFile {
                    path: rel.to_string(),
                    reason: "expected an array or an object with a `records` array".to_string(),
                })
            }
        },
        _ => {
            return Err(StoreError::MalformedFile {
                path: rel.to_string(),
                reason: "expected an array or an object with a `records` array".to_string(),
            })
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut entries_skipped = 0;
    for (index, entry) in entries.into_iter().enumerate() {
        match parse_entry(entry, &file_defaults, rel, index) {
            Ok(mut record) => {
                if record.category.is_empty() {
                    record.category = category.to_string();
                }
                if record.source_file.is_empty() {
                    record.source_file = rel.to_string();
                }
                if record.embedding.as_ref().is_some_and(Vec::is_empty) {
                    record.embedding = None;
                }
                records.push(record);
            }
            Err(e) => {
                entries_skipped += 1;
                events::corpus_entry_skipped(rel, index, &e.to_string());
            }
        }
    }

    Ok(ParsedFile {
        records,
        entries_skipped,
    })
}

fn parse_entry(
    entry: Value,
    file_defaults: &Map<String, Value>,
    rel: &str,
    index: usize,
) -> Result<Record, StoreError> {
    let Value::Object(mut obj) = entry else {
        return Err(StoreError::MalformedEntry {
            path: rel.to_string(),
            index,
            reason: "entry is not an object".to_string(),
        });
    };
    for key in ["version", "category"] {
        if let Some(default) = file_defaults.get(key) {
            obj.entry(key).or_insert_with(|| default.clone());
        }
    }
    serde_json::from_value(Value::Object(obj)).map_err(|e| StoreError::MalformedEntry {
        path: rel.to_string(),
        index,
        reason: e.to_string(),
    })
}

/// Count embedded records whose dimension differs from the first embedded one.
fn check_dimensions(category: &str, records: &[Arc<Record>]) -> usize {
    let mut dims = records
        .iter()
        .filter_map(|r| r.embedding.as_ref().map(Vec::len));
    let Some(expected) = dims.next() else {
        return 0;
    };
    let conflicting = dims.filter(|&d| d != expected).count();
    if conflicting > 0 {
        events::dimension_conflict(category, expected, conflicting);
    }
    conflicting
}

fn collection_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                events::corpus_file_skipped(&dir.display().to_string(), &e.to_string());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == CORPUS_FILE_EXTENSION)
        })
        .collect()
}

/// Non-empty relative path made only of plain names: no root, `.` or `..`.
fn is_contained(rel: &str) -> bool {
    let mut components = Path::new(rel).components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
