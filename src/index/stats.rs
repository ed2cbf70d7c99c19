// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus statistics, maintained incrementally.
//!
//! A running integer sum of analyzed lengths plus a document count. Integer
//! arithmetic is exact, so the average derived here always equals a full
//! recomputation over the current documents, after any sequence of adds and
//! removes.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    total_docs: usize,
    total_length: u64,
}

impl CorpusStats {
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// Sum of every present document's analyzed length.
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Mean analyzed length; 0 for an empty corpus.
    pub fn avg_doc_length(&self) -> f64 {
        if self.total_docs == 0 {
            0.0
        } else {
            self.total_length as f64 / self.total_docs as f64
        }
    }

    pub(crate) fn record_add(&mut self, analyzed_length: usize) {
        self.total_docs += 1;
        self.total_length += analyzed_length as u64;
    }

    pub(crate) fn record_remove(&mut self, analyzed_length: usize) {
        debug_assert!(self.total_docs > 0, "removing from an empty corpus");
        debug_assert!(self.total_length >= analyzed_length as u64);
        self.total_docs = self.total_docs.saturating_sub(1);
        self.total_length = self.total_length.saturating_sub(analyzed_length as u64);
    }
}
