//! Edit distance and the bounded check agree.

use sift::{levenshtein, levenshtein_within, FuzzyMatcher};

#[test]
fn test_classic_pairs() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("flaw", "lawn"), 2);
    assert_eq!(levenshtein("", "abc"), 3);
    assert_eq!(levenshtein("same", "same"), 0);
}

#[test]
fn test_counts_chars_not_bytes() {
    assert_eq!(levenshtein("café", "cafe"), 1);
    assert_eq!(levenshtein("日本", "日本語"), 1);
}

#[test]
fn test_within_matches_distance() {
    let pairs = [
        ("kitten", "sitting"),
        ("search", "serach"),
        ("a", ""),
        ("", ""),
        ("abcdef", "ghijkl"),
    ];
    for (a, b) in pairs {
        let d = levenshtein(a, b);
        for max in 0..8 {
            assert_eq!(levenshtein_within(a, b, max), d <= max, "{a:?} {b:?} max={max}");
        }
    }
}

#[test]
fn test_matcher_threshold() {
    let matcher = FuzzyMatcher::new();
    assert!(matcher.matches("color", "colour", 1));
    assert!(!matcher.matches("color", "colours", 1));
    assert!(matcher.within("color", "colours", 2));
}

#[test]
fn test_find_closest_is_stable() {
    let matcher = FuzzyMatcher::new();
    let closest = matcher.find_closest("hat", ["cat", "bat", "hat", "rat"], 1, 10);
    assert_eq!(closest, vec![("hat", 0), ("cat", 1), ("bat", 1), ("rat", 1)]);
}
