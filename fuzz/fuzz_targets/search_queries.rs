// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end search.
//!
//! Throws arbitrary query strings and options at a fixed corpus. Search has
//! no error path, so it must never panic and must always return a page that
//! honors limit, ordering and facet bounds.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{FacetConfig, FieldValue, Fields, SearchEngine, SearchOptions};
use std::collections::HashSet;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    limit: u8,
    offset: u8,
    fuzzy: bool,
    fuzzy_distance: u8,
    facet_min: u8,
}

const CORPUS: &[(&str, &str, &str)] = &[
    ("d1", "the quick brown fox jumps over the lazy dog", "animal"),
    ("d2", "rust memory safety without garbage collection", "lang"),
    ("d3", "new york city is not new orleans", "place"),
    ("d4", "café crème brûlée naïve résumé", "food"),
    ("d5", "東京 タワー 日本", "place"),
    ("d6", "quick quick quick repeated words words", "animal"),
];

fuzz_target!(|input: SearchInput| {
    static ENGINE: OnceLock<SearchEngine<String>> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| {
        let mut engine = SearchEngine::new();
        for (id, text, kind) in CORPUS {
            let mut fields = Fields::new();
            fields.insert("kind".into(), FieldValue::from(*kind));
            engine.index(*id, text.to_string(), text, fields);
        }
        engine
    });

    // Cap query length to avoid timeout, on a char boundary
    let query: String = input.query.chars().take(200).collect();
    let limit = usize::from(input.limit % 20);
    let min_count = usize::from(input.facet_min % 4).max(1);
    let options = SearchOptions::new()
        .limit(limit)
        .offset(usize::from(input.offset % 10))
        .fuzzy(input.fuzzy)
        .fuzzy_distance(usize::from(input.fuzzy_distance % 3))
        .facet(FacetConfig::new("kind").with_min_count(min_count));

    // INVARIANT 1: search() never panics
    let result = engine.search_with(&query, &options);

    // INVARIANT 2: page bounded by limit and by total
    assert!(result.hits.len() <= limit);
    assert!(result.hits.len() <= result.total);
    assert!(result.total <= CORPUS.len());

    // INVARIANT 3: scores finite and sorted, ties by doc id
    for pair in result.hits.windows(2) {
        assert!(pair[0].score.is_finite());
        let ordered = pair[0].score > pair[1].score
            || (pair[0].score == pair[1].score && pair[0].doc_id < pair[1].doc_id);
        assert!(ordered, "{:?} before {:?}", pair[0].doc_id, pair[1].doc_id);
    }

    // INVARIANT 4: no duplicate hits
    let mut seen = HashSet::new();
    for hit in &result.hits {
        assert!(seen.insert(hit.doc_id.as_str()), "duplicate {}", hit.doc_id);
    }

    // INVARIANT 5: facet buckets bounded by the matched set
    if let Some(buckets) = result.facets.get("kind") {
        let sum: usize = buckets.iter().map(|b| b.count).sum();
        assert!(sum <= result.total);
        assert!(buckets.iter().all(|b| b.count >= min_count));
    }

    // INVARIANT 6: suggestions only when nothing came back
    if !result.suggestions.is_empty() {
        assert!(input.fuzzy && result.hits.is_empty());
        assert!(result.suggestions.len() <= 5);
    }
});
