// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering.
//!
//! Candidate sets are built from maps, and equal BM25 scores are common
//! (identical documents, single-term queries over same-length docs). Without
//! a tiebreaker the page order would depend on iteration order. So:
//!
//! 1. **Score** - descending
//! 2. **Doc ID** - ascending, for absolute determinism

use std::cmp::Ordering;

/// Compare two `(doc_id, score)` pairs for ranking. `Less` means "ranks first".
pub fn compare_scored(a: (&str, f64), b: (&str, f64)) -> Ordering {
    match b.1.partial_cmp(&a.1) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.0.cmp(b.0),
    }
}

/// Sort scored documents into rank order.
pub fn rank(scored: &mut [(&str, f64)]) {
    scored.sort_by(|a, b| compare_scored(*a, *b));
}
