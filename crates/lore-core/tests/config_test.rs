use lore_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LoreConfig::from_toml("").unwrap();

    // Store defaults
    assert_eq!(config.store.root, "knowledge-base");
    assert_eq!(config.store.error_patterns_category, "errors");

    // Embedding defaults
    assert_eq!(config.embedding.provider, "onnx");
    assert_eq!(config.embedding.dimensions, 384);
    assert_eq!(config.embedding.pooling, Pooling::Mean);
    assert!(config.embedding.normalize);
    assert!(config.embedding.query_prefix.is_empty());

    // Retrieval defaults
    assert_eq!(config.retrieval.default_limit, 10);
    assert_eq!(config.retrieval.dedup_cap, 2);
    assert_eq!(config.retrieval.search_min_score, 0.25);
    assert_eq!(config.retrieval.troubleshoot_min_score, 0.1);
    assert_eq!(config.retrieval.bm25_k1, 1.5);
    assert_eq!(config.retrieval.bm25_b, 0.75);
    assert_eq!(config.retrieval.ranking_mode, RankingMode::Vector);
    assert!(config.retrieval.default_token_budget.is_none());
    assert!(config.retrieval.lexical_fallback);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[embedding]
model_id = "bge-small-en-v1.5"
pooling = "cls"

[retrieval]
dedup_cap = 3
default_token_budget = 4000
ranking_mode = "lexical"
"#;
    let config = LoreConfig::from_toml(toml).unwrap();
    assert_eq!(config.embedding.model_id, "bge-small-en-v1.5");
    assert_eq!(config.embedding.pooling, Pooling::Cls);
    // Non-overridden fields keep defaults
    assert!(config.embedding.normalize);
    assert_eq!(config.retrieval.dedup_cap, 3);
    assert_eq!(config.retrieval.default_token_budget, Some(4000));
    assert_eq!(config.retrieval.ranking_mode, RankingMode::Lexical);
    assert_eq!(config.retrieval.default_limit, 10);
}

#[test]
fn config_rejects_out_of_range_threshold() {
    let toml = r#"
[retrieval]
search_min_score = 1.5
"#;
    let err = LoreConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("search_min_score"));
}

#[test]
fn config_rejects_zero_dedup_cap() {
    let err = LoreConfig::from_toml("[retrieval]\ndedup_cap = 0\n").unwrap_err();
    assert!(err.to_string().contains("dedup_cap"));
}

#[test]
fn config_rejects_malformed_toml() {
    assert!(LoreConfig::from_toml("[retrieval\n").is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = LoreConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = LoreConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.store.root, config.store.root);
    assert_eq!(
        roundtripped.embedding.dimensions,
        config.embedding.dimensions
    );
}

#[test]
fn side_collections_are_recognized() {
    let store = StoreConfig::default();
    assert!(store.is_side_collection("errors"));
    assert!(store.is_side_collection("templates"));
    assert!(!store.is_side_collection("hooks"));
}

#[test]
fn retrieval_config_validates_on_its_own() {
    assert!(RetrievalConfig::default().validate().is_ok());
    let negative_k1 = RetrievalConfig {
        bm25_k1: -1.0,
        ..RetrievalConfig::default()
    };
    assert!(negative_k1.validate().is_err());
}
