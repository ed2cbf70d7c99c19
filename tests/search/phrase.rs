//! Phrase matching: consecutive positions, in order.

use crate::common::{text_engine, text_index};
use sift::{IndexQuery, MatchMode};

fn words(q: &str) -> Vec<String> {
    q.split_whitespace().map(str::to_string).collect()
}

#[test]
fn test_order_matters() {
    let engine = text_engine(&[("d1", "brown fox"), ("d2", "fox brown")]);
    assert_eq!(engine.search("\"brown fox\"").doc_ids(), vec!["d1"]);
    assert_eq!(engine.search("\"fox brown\"").doc_ids(), vec!["d2"]);
}

#[test]
fn test_adjacency_matters() {
    let engine = text_engine(&[("d1", "quick brown fox"), ("d2", "quick red brown fox")]);
    assert_eq!(engine.search("\"quick brown\"").doc_ids(), vec!["d1"]);
    // ALL mode ignores positions
    assert_eq!(engine.search("quick brown").doc_ids(), vec!["d1", "d2"]);
}

#[test]
fn test_three_word_phrase_needs_one_anchor() {
    // "a b" and "b c" both occur, but never "a b c" starting at one position
    let idx = text_index(&[("d1", "alpha beta xx beta gamma"), ("d2", "alpha beta gamma")]);
    let terms = words("alpha beta gamma");
    let result = idx.search(&IndexQuery::new(&terms).mode(MatchMode::Phrase));
    assert_eq!(result.doc_ids(), vec!["d2"]);
}

#[test]
fn test_stop_words_do_not_break_phrases() {
    // Positions are assigned after stop words are dropped
    let engine = text_engine(&[("d1", "state of the art"), ("d2", "state art")]);
    let result = engine.search("\"state of the art\"");
    assert_eq!(result.doc_ids(), vec!["d1", "d2"]);
}

#[test]
fn test_phrase_plus_terms_form_one_sequence() {
    let engine = text_engine(&[("d1", "fast quick brown fox"), ("d2", "quick brown fox fast")]);
    // Terms come first, then phrase words: "fast quick brown"
    assert_eq!(engine.search("fast \"quick brown\"").doc_ids(), vec!["d1"]);
}

#[test]
fn test_repeated_phrase_words() {
    let engine = text_engine(&[("d1", "bye bye now"), ("d2", "bye now bye")]);
    assert_eq!(engine.search("\"bye bye\"").doc_ids(), vec!["d1"]);
}

#[test]
fn test_unterminated_quote_is_plain_terms() {
    let engine = text_engine(&[("d1", "brown quick"), ("d2", "quick brown")]);
    let result = engine.search("\"quick brown");
    assert_eq!(result.doc_ids(), vec!["d1", "d2"]);
}
