use lore_core::errors::*;

#[test]
fn subsystem_errors_convert_into_lore_error() {
    let err: LoreError = StoreError::RootNotFound {
        path: "/nope".into(),
    }
    .into();
    assert!(matches!(err, LoreError::Store(_)));
    assert_eq!(err.to_string(), "corpus root not found: /nope");
}

#[test]
fn model_load_failure_is_transient() {
    let err: LoreError = EmbeddingError::ModelLoadFailed {
        model: "m".into(),
        reason: "missing".into(),
    }
    .into();
    assert!(err.is_transient());
}

#[test]
fn unavailable_search_is_transient_but_bad_config_is_not() {
    let unavailable: LoreError = RetrievalError::SearchUnavailable {
        reason: "model".into(),
    }
    .into();
    let invalid: LoreError = ConfigError::InvalidValue {
        field: "retrieval.dedup_cap".into(),
        reason: "must be at least 1".into(),
    }
    .into();
    assert!(unavailable.is_transient());
    assert!(!invalid.is_transient());
    assert!(unavailable.to_string().starts_with("search temporarily unavailable"));
}

#[test]
fn embedding_error_is_cloneable_and_comparable() {
    let err = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 768,
    };
    assert_eq!(err.clone(), err);
    assert_eq!(err.to_string(), "dimension mismatch: expected 384, got 768");
}
