//! BM25 behavior over generated corpora.

use proptest::prelude::*;
use sift::scoring::{idf, term_score};
use sift::{Fields, InvertedIndex};

fn filler_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["lorem", "ipsum", "dolor", "amet", "elit"]).prop_map(String::from),
        0..10,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// More occurrences of a query term never lower that document's score.
    #[test]
    fn prop_bm25_monotone_in_tf(
        others in prop::collection::vec(filler_strategy(), 0..6),
        filler in filler_strategy(),
        extra in 1usize..6,
    ) {
        let build = |repeats: usize| {
            let mut index: InvertedIndex<String> = InvertedIndex::new();
            for (i, words) in others.iter().enumerate() {
                index.add_text(format!("o{}", i), &words.join(" "), Fields::new());
            }
            let mut words = filler.clone();
            words.extend(std::iter::repeat("needle".to_string()).take(repeats));
            index.add_text("target", &words.join(" "), Fields::new());
            index
        };

        let query = vec!["needle".to_string()];
        let base = build(1).score("target", &query);
        let more = build(1 + extra).score("target", &query);
        prop_assert!(more >= base, "{} < {}", more, base);
    }

    /// idf is positive and shrinks as a term gets more common.
    #[test]
    fn prop_idf_positive_and_decreasing(total in 1usize..10_000, df in 1usize..10_000) {
        let df = df.min(total);
        let here = idf(total, df);
        prop_assert!(here > 0.0);
        if df < total {
            prop_assert!(idf(total, df + 1) <= here);
        }
    }

    /// Term contribution grows with tf for a fixed document.
    #[test]
    fn prop_term_score_monotone(
        tf in 1usize..50,
        doc_len in 1usize..200,
        avg in 0.0f64..100.0,
    ) {
        let doc_len = doc_len.max(tf);
        let idf = idf(100, 10);
        prop_assert!(term_score(idf, tf + 1, doc_len, avg) >= term_score(idf, tf, doc_len, avg));
    }

    /// Scores are finite and non-negative even for degenerate corpora.
    #[test]
    fn prop_scores_finite(docs in prop::collection::vec(filler_strategy(), 1..8)) {
        let mut index: InvertedIndex<String> = InvertedIndex::new();
        for (i, words) in docs.iter().enumerate() {
            index.add_text(format!("d{}", i), &words.join(" "), Fields::new());
        }
        let query = vec!["lorem".to_string(), "amet".to_string()];
        for i in 0..docs.len() {
            let score = index.score(&format!("d{}", i), &query);
            prop_assert!(score.is_finite() && score >= 0.0);
        }
    }
}
