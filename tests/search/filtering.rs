//! Field filters: exact values, value lists and inline `field:value` clauses.

use crate::common::catalog;
use sift::{FieldValue, FilterValue, SearchOptions};

#[test]
fn test_exact_text_filter() {
    let engine = catalog();
    let result = engine.search_with("cotton", &SearchOptions::new().filter("color", "red"));
    assert_eq!(result.doc_ids(), vec!["p1", "p5"]);
}

#[test]
fn test_any_of_filter() {
    let engine = catalog();
    let options = SearchOptions::new().filter(
        "size",
        vec![FieldValue::from("S"), FieldValue::from("M")],
    );
    let mut ids = engine.search_with("cotton", &options).doc_ids().into_iter().map(String::from).collect::<Vec<_>>();
    ids.sort();
    assert_eq!(ids, vec!["p1", "p4", "p5"]);
}

#[test]
fn test_numeric_filter_matches_integer_and_float() {
    let engine = catalog();
    let int = engine.search_with("sweater", &SearchOptions::new().filter("price", 60i64));
    let float = engine.search_with("sweater", &SearchOptions::new().filter("price", 60.0));
    assert_eq!(int.doc_ids(), vec!["p3"]);
    assert_eq!(float.doc_ids(), vec!["p3"]);
}

#[test]
fn test_unknown_field_matches_nothing() {
    let engine = catalog();
    let result = engine.search_with("cotton", &SearchOptions::new().filter("brand", "acme"));
    assert!(result.hits.is_empty());
    assert_eq!(result.total, 0);
}

#[test]
fn test_unmatched_value_matches_nothing() {
    let engine = catalog();
    let result = engine.search_with("cotton", &SearchOptions::new().filter("color", "purple"));
    assert_eq!(result.total, 0);
}

#[test]
fn test_multiple_filters_all_apply() {
    let engine = catalog();
    let options = SearchOptions::new()
        .filter("color", "red")
        .filter("size", FilterValue::from("S"));
    assert_eq!(engine.search_with("cotton", &options).doc_ids(), vec!["p5"]);
}

#[test]
fn test_inline_field_clause() {
    let engine = catalog();
    assert_eq!(engine.search("cotton color:green").doc_ids(), vec!["p4"]);
}

#[test]
fn test_inline_clause_overrides_caller_filter() {
    let engine = catalog();
    let options = SearchOptions::new().filter("color", "red");
    assert_eq!(engine.search_with("shirt color:blue", &options).doc_ids(), vec!["p2"]);
}

#[test]
fn test_empty_sided_field_clauses_match_nothing() {
    let engine = catalog();
    assert_eq!(engine.search("cotton").total, 4);
    assert!(engine.search("cotton color:").hits.is_empty());
    assert!(engine.search("cotton :red").hits.is_empty());
}

#[test]
fn test_trailing_colon_is_not_a_search_term() {
    let engine = crate::common::text_engine(&[("d1", "rust lang")]);
    assert!(engine.search("rust:").hits.is_empty());
    assert_eq!(engine.search("rust").doc_ids(), vec!["d1"]);
}
