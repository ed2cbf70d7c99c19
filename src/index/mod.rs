// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index: documents, positional postings, corpus statistics.
//!
//! ```text
//! postings:   term ──▶ { doc_id ──▶ [pos, pos, ...] }
//! documents:  doc_id ──▶ { payload, analyzed_length, fields, terms }
//! vocabulary: ordinal ──▶ term            (insertion order, for suggest)
//! stats:      total_docs, total_length    (avg_doc_length derived)
//! ```
//!
//! All mutation goes through [`InvertedIndex::add_document`] and
//! [`InvertedIndex::remove_document`]. Each document remembers which terms it
//! posted, so removal touches only those posting maps instead of scanning the
//! whole vocabulary.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSITIONS_SORTED**: per (term, doc) positions are strictly ascending
//! 2. **NO_EMPTY_TERMS**: a term whose posting map empties is removed, along
//!    with its vocabulary slot
//! 3. **UNIQUE_DOC_ID**: re-adding an id is a full remove-then-add
//! 4. **STATS_EXACT**: `avg_doc_length` equals the mean analyzed length of the
//!    documents currently present
//! 5. **FULL_PURGE**: a removed document leaves nothing behind in postings,
//!    fields or stats
//!
//! `contracts::validate_index` checks all of them.

mod facets;
mod filter;
mod highlight;
mod phrase;
mod postings;
mod stats;

pub use facets::histogram;
pub use highlight::snippets;
pub use phrase::phrase_matches;
pub use postings::Postings;
pub use stats::CorpusStats;

use crate::analysis::Analyzer;
use crate::config::HighlightConfig;
use crate::contracts;
use crate::scoring::{self, ranking};
use crate::types::{
    FacetConfig, Fields, Filters, MatchMode, Payload, SearchHit, SearchResult,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::time::Instant;
use tracing::debug;

/// Key under which snippets appear in [`SearchHit::highlights`].
pub const HIGHLIGHT_FIELD: &str = "content";

/// One stored document.
#[derive(Debug, Clone)]
pub struct DocumentEntry<T> {
    pub payload: T,
    /// Tokens the analyzer produced for the indexed text.
    pub analyzed_length: usize,
    pub fields: Fields,
    /// Distinct terms this document posted, in first-occurrence order.
    pub(crate) terms: Vec<String>,
}

/// Everything [`InvertedIndex::search`] needs besides the index itself.
#[derive(Debug, Clone, Copy)]
pub struct IndexQuery<'a> {
    /// Raw query words; analyzed before matching.
    pub terms: &'a [String],
    pub mode: MatchMode,
    pub limit: usize,
    pub offset: usize,
    pub filters: Option<&'a Filters>,
    pub facets: &'a [FacetConfig],
}

impl<'a> IndexQuery<'a> {
    /// ALL mode, first 10 hits, no filters or facets.
    pub fn new(terms: &'a [String]) -> Self {
        Self {
            terms,
            mode: MatchMode::All,
            limit: 10,
            offset: 0,
            filters: None,
            facets: &[],
        }
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn filters(mut self, filters: &'a Filters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn facets(mut self, facets: &'a [FacetConfig]) -> Self {
        self.facets = facets;
        self
    }
}

#[derive(Debug)]
pub struct InvertedIndex<T> {
    analyzer: Analyzer,
    highlight: HighlightConfig,
    pub(crate) postings: HashMap<String, Postings>,
    pub(crate) vocabulary: BTreeMap<u64, String>,
    next_ordinal: u64,
    pub(crate) documents: HashMap<String, DocumentEntry<T>>,
    pub(crate) stats: CorpusStats,
}

impl<T> Default for InvertedIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InvertedIndex<T> {
    /// An empty index with the default (simple) analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Analyzer::default())
    }

    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            highlight: HighlightConfig::default(),
            postings: HashMap::new(),
            vocabulary: BTreeMap::new(),
            next_ordinal: 0,
            documents: HashMap::new(),
            stats: CorpusStats::default(),
        }
    }

    pub fn with_highlight(mut self, highlight: HighlightConfig) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Analyze `text` and index it under `doc_id`.
    ///
    /// An existing entry with the same id is removed first; nothing of the old
    /// postings or fields survives.
    pub fn add_document(&mut self, doc_id: impl Into<String>, text: &str, payload: T, fields: Fields) {
        let doc_id = doc_id.into();
        if self.documents.contains_key(&doc_id) {
            self.remove_document(&doc_id);
        }

        let tokens = self.analyzer.analyze(text);

        // Group positions by term, remembering first-occurrence order
        let mut order: Vec<String> = Vec::new();
        let mut positions: HashMap<String, Vec<u32>> = HashMap::new();
        for (pos, token) in tokens.iter().enumerate() {
            let slot = positions.entry(token.clone()).or_insert_with(|| {
                order.push(token.clone());
                Vec::new()
            });
            slot.push(pos as u32);
        }

        for term in &order {
            let term_positions = positions.remove(term).unwrap_or_default();
            let next_ordinal = &mut self.next_ordinal;
            let vocabulary = &mut self.vocabulary;
            self.postings
                .entry(term.clone())
                .or_insert_with(|| {
                    let ordinal = *next_ordinal;
                    *next_ordinal += 1;
                    vocabulary.insert(ordinal, term.clone());
                    Postings::new(ordinal)
                })
                .docs
                .insert(doc_id.clone(), term_positions);
        }

        self.stats.record_add(tokens.len());
        debug!(
            doc_id = %doc_id,
            tokens = tokens.len(),
            terms = order.len(),
            total_docs = self.stats.total_docs(),
            "indexed document"
        );

        self.documents.insert(
            doc_id.clone(),
            DocumentEntry {
                payload,
                analyzed_length: tokens.len(),
                fields,
                terms: order,
            },
        );

        contracts::check_document_posted(self, &doc_id);
    }

    /// Remove a document. Returns `false` if the id was unknown.
    pub fn remove_document(&mut self, doc_id: &str) -> bool {
        let Some(entry) = self.documents.remove(doc_id) else {
            return false;
        };

        for term in &entry.terms {
            let Some(postings) = self.postings.get_mut(term) else {
                continue;
            };
            postings.docs.remove(doc_id);
            if postings.docs.is_empty() {
                let ordinal = postings.ordinal;
                self.postings.remove(term);
                self.vocabulary.remove(&ordinal);
            }
        }

        self.stats.record_remove(entry.analyzed_length);
        debug!(
            doc_id = %doc_id,
            total_docs = self.stats.total_docs(),
            "removed document"
        );

        contracts::check_document_purged(self, doc_id, &entry.terms);
        true
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, doc_id: &str) -> bool {
        self.documents.contains_key(doc_id)
    }

    /// The stored entry for a document.
    pub fn get(&self, doc_id: &str) -> Option<&DocumentEntry<T>> {
        self.documents.get(doc_id)
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    pub fn total_docs(&self) -> usize {
        self.stats.total_docs()
    }

    pub fn avg_doc_length(&self) -> f64 {
        self.stats.avg_doc_length()
    }

    /// Number of distinct documents containing `term` (already analyzed).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, Postings::doc_freq)
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> {
        self.postings.get(term)
    }

    /// Positions of `term` in `doc_id`, ascending.
    pub fn positions(&self, term: &str, doc_id: &str) -> Option<&[u32]> {
        self.postings.get(term)?.positions(doc_id)
    }

    /// Distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Every indexed term, in the order it first entered the index.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.values().map(String::as_str)
    }

    /// Terms starting with `prefix` (case-insensitive), in vocabulary order.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.vocabulary
            .values()
            .filter(|term| term.to_lowercase().starts_with(&prefix))
            .take(limit)
            .cloned()
            .collect()
    }

    // =========================================================================
    // MATCHING
    // =========================================================================

    /// Candidate documents for analyzed `tokens` under `mode`, ascending by id.
    pub fn candidates(&self, tokens: &[String], mode: MatchMode) -> BTreeSet<&str> {
        match mode {
            MatchMode::Any => tokens
                .iter()
                .filter_map(|t| self.postings.get(t))
                .flat_map(Postings::doc_ids)
                .collect(),
            MatchMode::All => self.all_candidates(tokens),
            MatchMode::Phrase if tokens.len() < 2 => self.all_candidates(tokens),
            MatchMode::Phrase => phrase_matches(&self.postings, tokens),
        }
    }

    fn all_candidates(&self, tokens: &[String]) -> BTreeSet<&str> {
        let mut lists = Vec::with_capacity(tokens.len());
        for token in tokens {
            match self.postings.get(token) {
                Some(postings) => lists.push(postings),
                None => return BTreeSet::new(),
            }
        }

        // Start from the rarest term to keep intersections small
        lists.sort_by_key(|p| p.doc_freq());
        let Some((first, rest)) = lists.split_first() else {
            return BTreeSet::new();
        };

        first
            .doc_ids()
            .filter(|doc_id| rest.iter().all(|p| p.docs.contains_key(*doc_id)))
            .collect()
    }

    /// BM25 score of one document against analyzed query `tokens`.
    ///
    /// Sums over every token, so a repeated query term counts once per
    /// repetition. Terms missing from the index add nothing.
    pub fn score(&self, doc_id: &str, tokens: &[String]) -> f64 {
        let Some(entry) = self.documents.get(doc_id) else {
            return 0.0;
        };
        let total_docs = self.stats.total_docs();
        let avg = self.stats.avg_doc_length();

        tokens
            .iter()
            .filter_map(|t| self.postings.get(t))
            .map(|postings| {
                let tf = postings.term_freq(doc_id);
                if tf == 0 {
                    return 0.0;
                }
                let idf = scoring::idf(total_docs, postings.doc_freq());
                scoring::term_score(idf, tf, entry.analyzed_length, avg)
            })
            .sum()
    }
}

impl<T: Payload + Clone> InvertedIndex<T> {
    /// Match, filter, score, paginate and facet.
    ///
    /// A query that analyzes to nothing returns the empty result without
    /// touching the index (and reports `took_ms == 0`).
    pub fn search(&self, query: &IndexQuery<'_>) -> SearchResult<T> {
        let tokens = self.analyzer.analyze(&query.terms.join(" "));
        if tokens.is_empty() {
            return SearchResult::empty();
        }

        let start = Instant::now();

        let mut matched = self.candidates(&tokens, query.mode);
        if let Some(filters) = query.filters {
            matched.retain(|doc_id| {
                self.documents
                    .get(*doc_id)
                    .is_some_and(|entry| filter::passes(&entry.fields, filters))
            });
        }

        let mut scored: Vec<(&str, f64)> = matched
            .iter()
            .map(|&doc_id| (doc_id, self.score(doc_id, &tokens)))
            .collect();
        ranking::rank(&mut scored);

        let total = scored.len();
        let hits: Vec<SearchHit<T>> = scored
            .iter()
            .skip(query.offset)
            .take(query.limit)
            .filter_map(|&(doc_id, score)| self.hit(doc_id, score, &tokens))
            .collect();

        let facets = query
            .facets
            .iter()
            .map(|config| {
                let values = matched
                    .iter()
                    .filter_map(|doc_id| self.documents.get(*doc_id))
                    .filter_map(|entry| entry.fields.get(&config.field));
                (config.field.clone(), histogram(values, config))
            })
            .collect();

        let took_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            mode = ?query.mode,
            tokens = tokens.len(),
            total,
            returned = hits.len(),
            took_ms,
            "search complete"
        );

        SearchResult {
            hits,
            total,
            took_ms,
            facets,
            suggestions: Vec::new(),
        }
    }

    fn hit(&self, doc_id: &str, score: f64, tokens: &[String]) -> Option<SearchHit<T>> {
        let entry = self.documents.get(doc_id)?;

        let mut highlights = BTreeMap::new();
        if let Some(text) = entry.payload.as_text() {
            let positions = distinct(tokens)
                .filter_map(|t| self.positions(t, doc_id))
                .flatten()
                .copied();
            let found = snippets(text, positions, &self.highlight);
            if !found.is_empty() {
                highlights.insert(HIGHLIGHT_FIELD.to_string(), found);
            }
        }

        Some(SearchHit {
            document: entry.payload.clone(),
            doc_id: doc_id.to_string(),
            score,
            highlights,
            metadata: entry
                .fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        })
    }
}

impl InvertedIndex<String> {
    /// Index text that doubles as its own payload.
    pub fn add_text(&mut self, doc_id: impl Into<String>, text: &str, fields: Fields) {
        self.add_document(doc_id, text, text.to_string(), fields);
    }
}

/// Tokens in first-occurrence order, duplicates skipped.
fn distinct(tokens: &[String]) -> impl Iterator<Item = &str> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(String::as_str)
        .filter(move |t| seen.insert(*t))
}
