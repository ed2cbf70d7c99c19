//! Ranking order, ties and paging.

use crate::common::text_engine;
use sift::SearchOptions;

#[test]
fn test_higher_term_frequency_ranks_first() {
    let engine = text_engine(&[
        ("a", "rust"),
        ("b", "rust rust rust"),
        ("c", "rust rust"),
    ]);
    let result = engine.search("rust");
    assert_eq!(result.doc_ids(), vec!["b", "c", "a"]);
    assert!(result.hits.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_rare_terms_weigh_more() {
    let engine = text_engine(&[
        ("d1", "common rare"),
        ("d2", "common words"),
        ("d3", "common stuff"),
    ]);
    let common = engine.search("common");
    let rare = engine.search("rare");
    assert!(rare.hits[0].score > common.hits[0].score);
}

#[test]
fn test_ties_broken_by_doc_id() {
    let engine = text_engine(&[("zeta", "same text"), ("alpha", "same text"), ("mid", "same text")]);
    assert_eq!(engine.search("same").doc_ids(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_pages_partition_the_results() {
    let docs: Vec<(String, String)> = (0..25)
        .map(|i| (format!("doc{:02}", i), format!("paged result {}", "word ".repeat(i))))
        .collect();
    let refs: Vec<(&str, &str)> = docs.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let engine = text_engine(&refs);

    let all = engine.search_with("paged", &SearchOptions::new().limit(100));
    assert_eq!(all.total, 25);

    let mut paged = Vec::new();
    for page in 0..3 {
        let result = engine.search_with(
            "paged",
            &SearchOptions::new().limit(10).offset(page * 10),
        );
        assert_eq!(result.total, 25);
        paged.extend(result.doc_ids().into_iter().map(String::from));
    }
    assert_eq!(paged, all.doc_ids());
}

#[test]
fn test_offset_past_end() {
    let engine = text_engine(&[("d1", "lonely")]);
    let result = engine.search_with("lonely", &SearchOptions::new().offset(5));
    assert!(result.hits.is_empty());
    assert_eq!(result.total, 1);
}

#[test]
fn test_zero_limit() {
    let engine = text_engine(&[("d1", "anything")]);
    let result = engine.search_with("anything", &SearchOptions::new().limit(0));
    assert!(result.hits.is_empty());
    assert_eq!(result.total, 1);
}
