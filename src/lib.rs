// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search with positional postings and BM25 ranking.
//!
//! Documents go in with a caller-chosen id, an opaque payload, the text to
//! index and optional scalar fields. Queries come back as ranked, paginated
//! hits with highlights, facet histograms and, when nothing matched, fuzzy
//! "did you mean" suggestions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │  analysis    │────▶│    index     │────▶│     scoring       │
//! │ (Tokenizer,  │     │ (postings,   │     │ (BM25, ranking)   │
//! │  filters)    │     │  phrase,     │     └───────────────────┘
//! └──────────────┘     │  facets,     │
//!                      │  highlight)  │
//! ┌──────────────┐     └──────────────┘     ┌───────────────────┐
//! │    query     │            │             │      fuzzy        │
//! │ (QueryParser)│            ▼             │ (Levenshtein)     │
//! └──────────────┘     ┌──────────────┐     └───────────────────┘
//!        │             │    engine    │              │
//!        └────────────▶│ SearchEngine │◀─────────────┘
//!                      └──────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        contracts                            │
//! │  (validate_index, debug-build checks after every mutation)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sift::{SearchEngine, SearchOptions, FacetConfig, testing::fields};
//!
//! let mut engine = SearchEngine::new();
//! engine.index("d1", "the quick brown fox".to_string(), "the quick brown fox", fields(&[("kind", "animal")]));
//! engine.index("d2", "the lazy dog".to_string(), "the lazy dog", fields(&[("kind", "animal")]));
//!
//! let result = engine.search("quick fox");
//! assert_eq!(result.doc_ids(), vec!["d1"]);
//!
//! let options = SearchOptions::new().facet(FacetConfig::new("kind"));
//! let result = engine.search_with("\"lazy dog\"", &options);
//! assert_eq!(result.facets["kind"][0].count, 1);
//! ```
//!
//! # Concurrency
//!
//! [`SearchEngine`] does no locking of its own: reads take `&self`, writes
//! take `&mut self`. [`SharedSearchEngine`] (feature `sync`) wraps it in a
//! reader/writer lock for hosts that share one engine across threads.

pub mod analysis;
pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod query;
pub mod scoring;
pub mod testing;
pub mod types;

// Re-exports for public API
pub use analysis::{Analyzer, TokenFilter, Tokenizer};
pub use config::{AnalyzerConfig, EngineConfig, FilterConfig, HighlightConfig, TokenizerConfig};
pub use contracts::validate_index;
pub use engine::{SearchEngine, SearchOptions};
pub use error::{Error, InvariantError, Result};
pub use fuzzy::{levenshtein, levenshtein_within, FuzzyMatcher};
pub use index::{CorpusStats, DocumentEntry, IndexQuery, InvertedIndex};
pub use query::{ParsedQuery, QueryParser};
pub use types::{
    FacetBucket, FacetConfig, FieldValue, Fields, FilterValue, Filters, MatchMode, Payload,
    SearchHit, SearchResult,
};

#[cfg(feature = "sync")]
pub use engine::SharedSearchEngine;
