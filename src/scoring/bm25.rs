// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! Okapi BM25, with the textbook parameters baked in:
//!
//! ```text
//! idf(t)     = ln((N - df + 0.5) / (df + 0.5) + 1)
//! score(t,d) = idf(t) * tf * (k1 + 1) / (tf + k1 * (1 - b + b * |d| / avgdl))
//! ```
//!
//! The `+ 1` inside the log keeps idf positive even when a term appears in
//! more than half the corpus, so adding a matching term never lowers a score.
//!
//! # Constants (not configurable)
//!
//! | Name | Value | Role                                  |
//! |------|-------|---------------------------------------|
//! | k1   | 1.2   | How fast repeated terms saturate      |
//! | b    | 0.75  | How strongly long documents are damped |

/// Term-frequency saturation.
pub const K1: f64 = 1.2;

/// Document-length normalization strength.
pub const B: f64 = 0.75;

/// Inverse document frequency of a term found in `doc_freq` of `total_docs` documents.
#[inline]
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    let n = total_docs as f64;
    let df = doc_freq as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// One term's contribution to one document's score.
///
/// An `avg_doc_length` of zero (every document analyzed to nothing) would
/// divide by zero; the divisor is taken as 1 in that case.
#[inline]
pub fn term_score(idf: f64, term_freq: usize, doc_length: usize, avg_doc_length: f64) -> f64 {
    let tf = term_freq as f64;
    let divisor = if avg_doc_length == 0.0 { 1.0 } else { avg_doc_length };
    let length_ratio = doc_length as f64 / divisor;
    idf * (tf * (K1 + 1.0)) / (tf + K1 * (1.0 - B + B * length_ratio))
}
