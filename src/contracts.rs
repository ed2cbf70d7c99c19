// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the inverted index.
//!
//! Two layers:
//!
//! 1. **Local checks** (`check_*`) run after every mutation in debug builds and
//!    look only at the document just touched. They compile to nothing in
//!    release builds.
//! 2. **Full validation** ([`validate_index`]) walks the whole index and
//!    returns the first violation as an [`InvariantError`]. Property tests and
//!    fuzz targets call it after arbitrary operation sequences.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Check                     | Invariant                                          |
//! |---------------------------|----------------------------------------------------|
//! | `UnsortedPositions`       | positions per (term, doc) strictly ascending       |
//! | `EmptyPostingMap`         | no term survives with zero documents               |
//! | `DanglingPosting`         | every posted doc id is a stored document           |
//! | `LengthMismatch`          | analyzed length equals the positions posted for it |
//! | `StatsDrift`              | running stats equal a full recomputation           |
//! | `VocabularyMismatch`      | vocabulary order table covers exactly the postings |

use crate::error::InvariantError;
use crate::index::InvertedIndex;
use crate::scoring::{B, K1};
use std::collections::HashMap;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    assert!(K1 > 0.0);
    assert!(B >= 0.0);
    assert!(B <= 1.0);
};

// ============================================================================
// FULL VALIDATION
// ============================================================================

/// Walk the whole index and report the first broken invariant.
pub fn validate_index<T>(index: &InvertedIndex<T>) -> Result<(), InvariantError> {
    let mut posted_per_doc: HashMap<&str, usize> = HashMap::new();

    for (term, postings) in &index.postings {
        if postings.docs.is_empty() {
            return Err(InvariantError::EmptyPostingMap { term: term.clone() });
        }

        for (doc_id, positions) in &postings.docs {
            if !index.documents.contains_key(doc_id) {
                return Err(InvariantError::DanglingPosting {
                    term: term.clone(),
                    doc_id: doc_id.clone(),
                });
            }
            if let Some(i) = positions.windows(2).position(|w| w[0] >= w[1]) {
                return Err(InvariantError::UnsortedPositions {
                    term: term.clone(),
                    doc_id: doc_id.clone(),
                    position: i + 1,
                });
            }
            *posted_per_doc.entry(doc_id.as_str()).or_default() += positions.len();
        }
    }

    for (doc_id, entry) in &index.documents {
        let actual = posted_per_doc.get(doc_id.as_str()).copied().unwrap_or(0);
        if actual != entry.analyzed_length {
            return Err(InvariantError::LengthMismatch {
                doc_id: doc_id.clone(),
                claimed: entry.analyzed_length,
                actual,
            });
        }
    }

    let actual_len: u64 = index
        .documents
        .values()
        .map(|entry| entry.analyzed_length as u64)
        .sum();
    let stats = index.stats;
    if stats.total_docs() != index.documents.len() || stats.total_length() != actual_len {
        return Err(InvariantError::StatsDrift {
            claimed_docs: stats.total_docs(),
            claimed_len: stats.total_length(),
            actual_docs: index.documents.len(),
            actual_len,
        });
    }

    let ordered = index.vocabulary.len();
    let posted = index.postings.len();
    let covered = index
        .vocabulary
        .iter()
        .all(|(ordinal, term)| index.postings.get(term).is_some_and(|p| p.ordinal == *ordinal));
    if ordered != posted || !covered {
        return Err(InvariantError::VocabularyMismatch { ordered, posted });
    }

    Ok(())
}

// ============================================================================
// LOCAL CHECKS (debug builds only)
// ============================================================================

/// After `add_document`: every term the document claims is posted for it,
/// sorted, and the positions add up to its analyzed length.
#[inline]
pub fn check_document_posted<T>(index: &InvertedIndex<T>, doc_id: &str) {
    if !cfg!(debug_assertions) {
        return;
    }
    let entry = index.documents.get(doc_id);
    debug_assert!(entry.is_some(), "Contract violation: '{}' missing after add", doc_id);
    let Some(entry) = entry else {
        return;
    };

    let mut posted = 0;
    for term in &entry.terms {
        let positions = index.positions(term, doc_id);
        debug_assert!(
            positions.is_some(),
            "Contract violation: term '{}' not posted for '{}'",
            term,
            doc_id
        );
        if let Some(positions) = positions {
            debug_assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "Contract violation: positions for '{}' in '{}' not strictly ascending",
                term,
                doc_id
            );
            posted += positions.len();
        }
    }

    debug_assert_eq!(
        posted, entry.analyzed_length,
        "Contract violation: '{}' posted {} positions for length {}",
        doc_id, posted, entry.analyzed_length
    );
}

/// After `remove_document`: none of the document's terms still point at it,
/// and none survive empty.
#[inline]
pub fn check_document_purged<T>(index: &InvertedIndex<T>, doc_id: &str, terms: &[String]) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert!(!index.documents.contains_key(doc_id));
    for term in terms {
        if let Some(postings) = index.postings.get(term) {
            debug_assert!(
                !postings.docs.contains_key(doc_id),
                "Contract violation: '{}' still posted for removed '{}'",
                term,
                doc_id
            );
            debug_assert!(
                !postings.docs.is_empty(),
                "Contract violation: term '{}' left with an empty posting map",
                term
            );
        }
    }
}
