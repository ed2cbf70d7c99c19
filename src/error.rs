// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors.
//!
//! Only construction can fail. Once an engine exists, every search-path
//! operation degrades to an empty result instead of an error: unknown ids,
//! empty queries and filters on missing fields all have well-defined answers.

use thiserror::Error;

/// Construction-time failures.
#[derive(Debug, Error)]
pub enum Error {
    /// N-gram bounds must satisfy `1 <= min_n <= max_n`.
    #[error("invalid n-gram range: min_n {min_n}, max_n {max_n} (need 1 <= min_n <= max_n)")]
    InvalidNgramRange { min_n: usize, max_n: usize },

    /// The engine configuration could not be parsed.
    #[error("invalid engine configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Structural problems found by [`crate::contracts::validate_index`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A posting's positions are not strictly ascending.
    #[error("positions for '{term}' in '{doc_id}' not strictly ascending at {position}")]
    UnsortedPositions {
        term: String,
        doc_id: String,
        position: usize,
    },

    /// A term survived with no documents behind it.
    #[error("term '{term}' has an empty posting map")]
    EmptyPostingMap { term: String },

    /// A posting points at a document the index no longer holds.
    #[error("term '{term}' references unknown document '{doc_id}'")]
    DanglingPosting { term: String, doc_id: String },

    /// The analyzed length of a document disagrees with its postings.
    #[error("document '{doc_id}' has length {claimed} but {actual} positions are posted")]
    LengthMismatch {
        doc_id: String,
        claimed: usize,
        actual: usize,
    },

    /// The running corpus statistics drifted from a full recomputation.
    #[error("corpus stats report {claimed_docs} docs / {claimed_len} tokens, documents hold {actual_docs} / {actual_len}")]
    StatsDrift {
        claimed_docs: usize,
        claimed_len: u64,
        actual_docs: usize,
        actual_len: u64,
    },

    /// The vocabulary order table and the postings disagree.
    #[error("vocabulary order holds {ordered} terms but postings hold {posted}")]
    VocabularyMismatch { ordered: usize, posted: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
