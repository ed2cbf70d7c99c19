// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The public facade: query strings in, ranked results out.
//!
//! ```text
//! "+rust -java lang:en \"memory safety\""
//!        │
//!        ▼
//!   QueryParser ──▶ terms + required + phrase words ──▶ InvertedIndex::search
//!        │                                                   │
//!        └── field_queries ──▶ merged into filters ──────────┘
//!                                                            │
//!                         excluded-term post-filter ◀────────┘
//!                                   │
//!                       zero hits + fuzzy? ──▶ FuzzyMatcher over vocabulary
//! ```
//!
//! The excluded-term filter is a plain case-sensitive substring check on the
//! payload's string form, applied to the returned page only. `total` still
//! counts what the index matched.

#[cfg(feature = "sync")]
mod shared;

#[cfg(feature = "sync")]
pub use shared::SharedSearchEngine;

use crate::analysis::Analyzer;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::fuzzy::FuzzyMatcher;
use crate::index::{IndexQuery, InvertedIndex};
use crate::query::QueryParser;
use crate::types::{
    FacetConfig, FieldValue, Fields, FilterValue, Filters, MatchMode, Payload, SearchResult,
};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Per-call knobs for [`SearchEngine::search_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    pub limit: usize,
    pub offset: usize,
    pub filters: Filters,
    pub facets: Vec<FacetConfig>,
    /// Offer "did you mean" suggestions when nothing matches.
    pub fuzzy: bool,
    pub fuzzy_distance: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            filters: Filters::new(),
            facets: Vec::new(),
            fuzzy: false,
            fuzzy_distance: 1,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Add (or replace) the filter on one field.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    pub fn facet(mut self, facet: FacetConfig) -> Self {
        self.facets.push(facet);
        self
    }

    pub fn fuzzy(mut self, enabled: bool) -> Self {
        self.fuzzy = enabled;
        self
    }

    pub fn fuzzy_distance(mut self, distance: usize) -> Self {
        self.fuzzy_distance = distance;
        self
    }
}

#[derive(Debug)]
pub struct SearchEngine<T> {
    index: InvertedIndex<T>,
    parser: QueryParser,
    matcher: FuzzyMatcher,
    max_suggestions: usize,
}

impl<T> Default for SearchEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchEngine<T> {
    /// Engine with the default configuration.
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            index: InvertedIndex::new().with_highlight(config.highlight),
            parser: QueryParser::new(),
            matcher: FuzzyMatcher::new(),
            max_suggestions: config.max_suggestions,
        }
    }

    /// Fails only if the analyzer configuration is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        let analyzer = Analyzer::from_config(&config.analyzer)?;
        Ok(Self::with_analyzer(analyzer, config))
    }

    /// Use a hand-built analyzer (custom tokenizer or closure filters).
    /// The config's analyzer section is ignored.
    pub fn with_analyzer(analyzer: Analyzer, config: EngineConfig) -> Self {
        Self {
            index: InvertedIndex::with_analyzer(analyzer).with_highlight(config.highlight),
            parser: QueryParser::new(),
            matcher: FuzzyMatcher::new(),
            max_suggestions: config.max_suggestions,
        }
    }

    /// Index `text` under `doc_id`, storing `document` as the payload.
    /// An existing document with the same id is replaced.
    pub fn index(&mut self, doc_id: impl Into<String>, document: T, text: &str, fields: Fields) {
        self.index.add_document(doc_id, text, document, fields);
    }

    pub fn remove(&mut self, doc_id: &str) -> bool {
        self.index.remove_document(doc_id)
    }

    /// Indexed terms starting with `prefix`, case-insensitive, in insertion order.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.index.suggest(prefix, limit)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The stored payload for `doc_id`.
    pub fn get(&self, doc_id: &str) -> Option<&T> {
        self.index.get(doc_id).map(|entry| &entry.payload)
    }

    /// Read-only access to the underlying index.
    pub fn index_ref(&self) -> &InvertedIndex<T> {
        &self.index
    }

    /// Pool the closest vocabulary terms for every analyzed query token.
    fn did_you_mean(&self, terms: &[String], max_distance: usize) -> Vec<String> {
        let tokens = self.index.analyzer().analyze(&terms.join(" "));
        let mut seen = HashSet::new();
        let mut pooled = Vec::new();

        for token in &tokens {
            let closest = self.matcher.find_closest(
                token,
                self.index.vocabulary(),
                max_distance,
                self.max_suggestions,
            );
            for (term, _) in closest {
                if seen.insert(term) {
                    pooled.push(term.to_string());
                }
            }
        }

        pooled.truncate(self.max_suggestions);
        trace!(tokens = ?tokens, suggestions = ?pooled, "fuzzy fallback");
        pooled
    }
}

impl<T: Payload + Clone> SearchEngine<T> {
    /// Search with default options: first 10 hits, no filters, no fuzzy fallback.
    pub fn search(&self, query: &str) -> SearchResult<T> {
        self.search_with(query, &SearchOptions::default())
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> SearchResult<T> {
        let parsed = self.parser.parse(query);
        let terms = parsed.search_terms();
        let mode = if parsed.phrases.is_empty() {
            MatchMode::All
        } else {
            MatchMode::Phrase
        };

        // Inline field:value clauses win over caller filters on the same field
        let mut filters = options.filters.clone();
        for (field, value) in &parsed.field_queries {
            filters.insert(
                field.clone(),
                FilterValue::Exact(FieldValue::Text(value.clone())),
            );
        }

        let mut index_query = IndexQuery::new(&terms)
            .mode(mode)
            .limit(options.limit)
            .offset(options.offset)
            .facets(&options.facets);
        if !filters.is_empty() {
            index_query = index_query.filters(&filters);
        }

        let mut result = self.index.search(&index_query);

        if !parsed.excluded.is_empty() {
            let before = result.hits.len();
            result.hits.retain(|hit| {
                let text = hit.document.search_text();
                !parsed.excluded.iter().any(|term| text.contains(term.as_str()))
            });
            debug!(
                excluded = ?parsed.excluded,
                dropped = before - result.hits.len(),
                "excluded-term post-filter"
            );
        }

        if options.fuzzy && result.hits.is_empty() {
            result.suggestions = self.did_you_mean(&terms, options.fuzzy_distance);
        }

        result
    }
}
