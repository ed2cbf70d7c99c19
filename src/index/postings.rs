// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional postings for one term.
//!
//! # Invariants
//!
//! 1. **POSITIONS_SORTED**: each document's positions are strictly ascending
//! 2. **NON_EMPTY**: a term with no documents is removed from the index, never kept empty
//!
//! Documents are keyed in a `BTreeMap`, so every walk over a posting map
//! visits doc ids in ascending order. Candidate sets inherit that order for free.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postings {
    /// Insertion sequence number, for vocabulary order.
    pub(crate) ordinal: u64,
    pub(crate) docs: BTreeMap<String, Vec<u32>>,
}

impl Postings {
    pub(crate) fn new(ordinal: u64) -> Self {
        Self {
            ordinal,
            docs: BTreeMap::new(),
        }
    }

    /// Number of documents containing the term.
    #[inline]
    pub fn doc_freq(&self) -> usize {
        self.docs.len()
    }

    /// Positions of the term in one document, ascending.
    #[inline]
    pub fn positions(&self, doc_id: &str) -> Option<&[u32]> {
        self.docs.get(doc_id).map(Vec::as_slice)
    }

    /// Occurrences of the term in one document.
    #[inline]
    pub fn term_freq(&self, doc_id: &str) -> usize {
        self.docs.get(doc_id).map_or(0, Vec::len)
    }

    /// Documents containing the term, ascending.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.docs.keys().map(String::as_str)
    }
}
