use serde::{Deserialize, Serialize};

use super::Version;

/// Per-record token information.
///
/// Legacy corpora store the lexical token list; newer ones store a
/// token-count estimate used for budget trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenInfo {
    Count(usize),
    Terms(Vec<String>),
}

/// One retrievable chunk of corpus content. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique within a version tree. May collide across trees.
    pub id: String,
    #[serde(alias = "heading")]
    pub title: String,
    /// Display text, possibly prefixed with ancestor headings.
    #[serde(alias = "rawContent", alias = "raw_content")]
    pub content: String,
    #[serde(default)]
    pub breadcrumb: String,
    pub version: Version,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenInfo>,
    /// L2-normalized at generation time. `None` excludes the record from vector ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    /// Model that produced `embedding`, when the corpus records it.
    #[serde(
        default,
        alias = "embedding_model",
        skip_serializing_if = "Option::is_none"
    )]
    pub embedding_model: Option<String>,
    #[serde(default, alias = "source_file")]
    pub source_file: String,
    /// Case-insensitive regex matched against error text (error-pattern records only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl Record {
    /// Minimal record, used by fixtures and tests.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        version: Version,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            breadcrumb: String::new(),
            version,
            category: String::new(),
            tags: Vec::new(),
            tokens: None,
            embedding: None,
            embedding_model: None,
            source_file: String::new(),
            pattern: None,
            cause: None,
            solution: None,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.embedding.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// Precomputed lexical tokens, if the corpus shipped them.
    pub fn lexical_terms(&self) -> Option<&[String]> {
        match &self.tokens {
            Some(TokenInfo::Terms(terms)) => Some(terms),
            _ => None,
        }
    }

    /// Stored token-count estimate, if the corpus shipped one.
    pub fn token_count(&self) -> Option<usize> {
        match &self.tokens {
            Some(TokenInfo::Count(n)) => Some(*n),
            _ => None,
        }
    }

    /// Title and body joined, the text the lexical ranker indexes when no
    /// token list is stored.
    pub fn searchable_text(&self) -> String {
        let mut text = String::with_capacity(self.title.len() + self.content.len() + 1);
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.content);
        for tag in &self.tags {
            text.push(' ');
            text.push_str(tag);
        }
        text
    }
}
