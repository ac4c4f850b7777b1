//! Fixture corpus and builders shared by the Lore test suites.
//!
//! The golden corpus under `corpus/` uses 4-dimensional unit embeddings
//! tagged with [`FIXTURE_MODEL`]. Axis meaning:
//! 0 = hooks, 1 = services, 2 = authentication, 3 = database.

use std::path::{Path, PathBuf};

use lore_core::models::{Record, Version};
use serde::Serialize;
use tempfile::TempDir;

/// Model id every golden-corpus embedding is tagged with.
pub const FIXTURE_MODEL: &str = "fixture-4d";

/// Dimensionality of golden-corpus embeddings.
pub const FIXTURE_DIMENSIONS: usize = 4;

/// Root of the golden corpus shipped with this crate.
pub fn corpus_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("corpus")
}

/// Unit vector along `axis`.
pub fn axis(dimensions: usize, axis: usize) -> Vec<f32> {
    let mut v = vec![0.0; dimensions];
    v[axis] = 1.0;
    v
}

/// L2-normalized copy of `v`.
pub fn normalized(v: &[f32]) -> Vec<f32> {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return v.to_vec();
    }
    v.iter().map(|x| x / norm).collect()
}

/// Record with an embedding tagged with [`FIXTURE_MODEL`].
pub fn embedded_record(id: &str, version: Version, embedding: Vec<f32>) -> Record {
    let mut record = Record::new(id, format!("Title {id}"), format!("Content of {id}"), version);
    record.embedding = Some(embedding);
    record.embedding_model = Some(FIXTURE_MODEL.to_string());
    record.source_file = format!("{id}.json");
    record
}

/// Error-pattern record.
pub fn pattern_record(id: &str, pattern: &str, version: Version) -> Record {
    let mut record = Record::new(
        id,
        format!("Error {id}"),
        format!("Explanation of {id}"),
        version,
    );
    record.pattern = Some(pattern.to_string());
    record.cause = Some(format!("cause of {id}"));
    record.solution = Some(format!("solution for {id}"));
    record
}

/// A throwaway corpus directory populated file by file.
///
/// # Panics
/// Every method panics on I/O failure; only for use in tests.
pub struct TempCorpus {
    dir: TempDir,
}

impl TempCorpus {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap_or_else(|e| panic!("temp corpus: {e}")),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn root_string(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Write `records` as a JSON array to `<root>/<category>/<file>`.
    pub fn write_records<T: Serialize>(
        &self,
        category: &str,
        file: &str,
        records: &[T],
    ) -> PathBuf {
        let body = serde_json::to_string_pretty(records)
            .unwrap_or_else(|e| panic!("serialize fixture records: {e}"));
        self.write_raw(category, file, &body)
    }

    /// Write raw text to `<root>/<category>/<file>`, creating directories.
    pub fn write_raw(&self, category: &str, file: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(category).join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("create {}: {e}", parent.display()));
        }
        std::fs::write(&path, body).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
        path
    }

    /// Copy the golden corpus into this directory.
    pub fn with_golden_corpus(self) -> Self {
        copy_dir(&corpus_root(), self.dir.path());
        self
    }
}

impl Default for TempCorpus {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_dir(from: &Path, to: &Path) {
    let entries =
        std::fs::read_dir(from).unwrap_or_else(|e| panic!("read {}: {e}", from.display()));
    for entry in entries {
        let entry = entry.unwrap_or_else(|e| panic!("dir entry: {e}"));
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            std::fs::create_dir_all(&target).unwrap_or_else(|e| panic!("mkdir: {e}"));
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).unwrap_or_else(|e| panic!("copy: {e}"));
        }
    }
}
