use lore_core::config::EmbeddingConfig;
use lore_core::models::*;

#[test]
fn record_accepts_legacy_field_names() {
    let json = r#"{
        "id": "hooks-1",
        "heading": "Before hooks",
        "rawContent": "Hooks run before service methods.",
        "version": "v5",
        "source_file": "guides/hooks.md",
        "tokens": ["hooks", "run", "before", "service", "methods"]
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.title, "Before hooks");
    assert_eq!(record.content, "Hooks run before service methods.");
    assert_eq!(record.version, Version::V5);
    assert_eq!(record.source_file, "guides/hooks.md");
    assert_eq!(record.lexical_terms().map(|t| t.len()), Some(5));
    assert_eq!(record.token_count(), None);
    assert!(!record.is_embedded());
}

#[test]
fn record_accepts_current_field_names() {
    let json = r#"{
        "id": "auth-2",
        "title": "JWT strategy",
        "content": "Configure the jwt strategy.",
        "version": "all",
        "category": "authentication",
        "tags": ["auth", "jwt"],
        "tokens": 42,
        "embedding": [0.6, 0.8],
        "embeddingModel": "all-MiniLM-L6-v2",
        "sourceFile": "api/authentication.md"
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.version, Version::All);
    assert_eq!(record.token_count(), Some(42));
    assert!(record.is_embedded());
    assert_eq!(record.embedding_model.as_deref(), Some("all-MiniLM-L6-v2"));
}

#[test]
fn record_with_non_numeric_embedding_is_rejected() {
    let json = r#"{
        "id": "x", "title": "x", "content": "x", "version": "v6",
        "embedding": ["a", "b"]
    }"#;
    assert!(serde_json::from_str::<Record>(json).is_err());
}

#[test]
fn record_missing_required_field_is_rejected() {
    let json = r#"{ "id": "x", "title": "x", "version": "v6" }"#;
    assert!(serde_json::from_str::<Record>(json).is_err());
}

#[test]
fn unknown_version_tag_deserializes() {
    let json = r#"{ "id": "x", "title": "x", "content": "x", "version": "v4" }"#;
    let record: Record = serde_json::from_str(json).unwrap();
    assert_eq!(record.version, Version::Unrecognized("v4".to_string()));
    assert!(!record.version.is_recognized());
}

#[test]
fn empty_embedding_is_not_embedded() {
    let mut record = Record::new("a", "t", "c", Version::V5);
    record.embedding = Some(Vec::new());
    assert!(!record.is_embedded());
}

#[test]
fn searchable_text_includes_title_and_tags() {
    let mut record = Record::new("a", "Channels", "Real-time events", Version::V5);
    record.tags = vec!["realtime".into()];
    let text = record.searchable_text();
    assert!(text.contains("Channels"));
    assert!(text.contains("Real-time events"));
    assert!(text.contains("realtime"));
}

#[test]
fn diagnosis_accessors() {
    let record = std::sync::Arc::new(Record::new("e1", "t", "c", Version::V5));
    let semantic = Diagnosis::Semantic {
        record: record.clone(),
        confidence: 0.8,
    };
    assert_eq!(semantic.match_kind(), MatchKind::Semantic);
    assert_eq!(semantic.confidence(), Some(0.8));
    assert_eq!(semantic.record().map(|r| r.id.as_str()), Some("e1"));

    let fallback = Diagnosis::Fallback {
        guidance: "check".into(),
    };
    assert_eq!(fallback.match_kind(), MatchKind::Fallback);
    assert!(fallback.record().is_none());
    assert!(fallback.confidence().is_none());
}

#[test]
fn diagnosis_serializes_with_match_kind_tag() {
    let fallback = Diagnosis::Fallback {
        guidance: "g".into(),
    };
    let json = serde_json::to_value(&fallback).unwrap();
    assert_eq!(json["matchKind"], "fallback");
}

#[test]
fn scheme_accepts_untagged_and_matching_tags() {
    let scheme = EmbeddingScheme::from(&EmbeddingConfig::default());
    assert!(scheme.accepts(None));
    assert!(scheme.accepts(Some("ALL-MiniLM-L6-v2")));
    assert!(!scheme.accepts(Some("bge-base-en")));
}
