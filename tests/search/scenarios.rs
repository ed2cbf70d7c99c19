//! End-to-end scenarios through the public facade.

use crate::common::{catalog, init_tracing, text_engine};
use sift::{FuzzyMatcher, QueryParser, SearchOptions};
use std::collections::BTreeMap;

#[test]
fn test_all_terms_must_match() {
    init_tracing();
    let engine = text_engine(&[("d1", "the quick brown fox"), ("d2", "the lazy dog")]);
    let result = engine.search("quick fox");
    assert_eq!(result.doc_ids(), vec!["d1"]);
    assert_eq!(result.total, 1);
}

#[test]
fn test_phrase_query() {
    init_tracing();
    let engine = text_engine(&[("d1", "new york city"), ("d2", "new orleans city")]);
    assert_eq!(engine.search("\"new york\"").doc_ids(), vec!["d1"]);
}

#[test]
fn test_edit_distance() {
    assert_eq!(FuzzyMatcher::new().distance("kitten", "sitting"), 3);
}

#[test]
fn test_field_filter() {
    let mut engine = sift::SearchEngine::new();
    let mut red = sift::Fields::new();
    red.insert("color".into(), "red".into());
    let mut blue = sift::Fields::new();
    blue.insert("color".into(), "blue".into());
    engine.index("d1", "payload one".to_string(), "red car", red);
    engine.index("d2", "payload two".to_string(), "red car", blue);

    let result = engine.search_with("car", &SearchOptions::new().filter("color", "red"));
    assert_eq!(result.doc_ids(), vec!["d1"]);
}

#[test]
fn test_parse_every_clause_kind() {
    let parsed = QueryParser::new().parse("+required -excluded field:val \"a phrase\" free");
    assert_eq!(parsed.required, vec!["required"]);
    assert_eq!(parsed.excluded, vec!["excluded"]);
    assert_eq!(
        parsed.field_queries,
        BTreeMap::from([("field".to_string(), "val".to_string())])
    );
    assert_eq!(parsed.phrases, vec!["a phrase"]);
    assert_eq!(parsed.terms, vec!["free"]);
}

#[test]
fn test_payload_returned_verbatim() {
    let engine = catalog();
    let result = engine.search("sweater");
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.hits[0].document, "red wool sweater");
    assert_eq!(result.hits[0].metadata["price"], serde_json::json!(60));
    assert_eq!(result.hits[0].metadata["color"], serde_json::json!("red"));
}

#[test]
fn test_json_payloads() {
    init_tracing();
    let mut engine: sift::SearchEngine<serde_json::Value> = sift::SearchEngine::new();
    engine.index(
        "a1",
        serde_json::json!({"title": "Ownership", "chapter": 4}),
        "ownership and borrowing",
        sift::Fields::new(),
    );
    let result = engine.search("borrowing");
    assert_eq!(result.hits[0].document["chapter"], 4);
    assert!(result.hits[0].highlights.is_empty());
}

#[test]
fn test_excluded_terms_drop_hits() {
    let engine = catalog();
    let result = engine.search("cotton -cap");
    assert_eq!(result.doc_ids(), vec!["p1", "p2"]);
    assert_eq!(result.total, 4);
}

#[test]
fn test_stop_words_only_query_is_empty() {
    let engine = catalog();
    let result = engine.search("the and of");
    assert!(result.hits.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.took_ms, 0.0);
}
