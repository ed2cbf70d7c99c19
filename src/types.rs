// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary of the public API.
//!
//! Field values, filters, facet requests, hits and results. Everything a
//! caller hands to the engine or gets back from it lives here, so the index
//! internals can change without touching the surface.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// PAYLOADS
// =============================================================================

/// What the index needs to know about a stored document.
///
/// The payload itself is opaque: it is stored by value and handed back
/// verbatim in hits. Two views of it are used during search:
///
/// - [`as_text`](Payload::as_text) is the original text for highlighting.
///   Payloads that are not text return `None` and produce no highlights.
/// - [`search_text`](Payload::search_text) is the string form checked by the
///   excluded-term post-filter.
pub trait Payload {
    /// The payload as text, if it is text.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// The payload's string form.
    fn search_text(&self) -> Cow<'_, str>;
}

impl Payload for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Payload for Arc<str> {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Payload for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn search_text(&self) -> Cow<'_, str> {
        match self {
            serde_json::Value::String(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

// =============================================================================
// FIELDS AND FILTERS
// =============================================================================

/// A scalar attached to a document for filtering and faceting.
///
/// Untagged, so plain JSON scalars deserialize straight into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Render as JSON for hit metadata.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Integer(i) => serde_json::Value::from(*i),
            FieldValue::Float(f) => serde_json::Value::from(*f),
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// Numbers compare across `Integer`/`Float`; text never equals a number.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Integer(a), FieldValue::Float(b))
            | (FieldValue::Float(b), FieldValue::Integer(a)) => (*a as f64) == *b,
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            _ => false,
        }
    }
}

/// The facet bucket key. Floats always keep a fractional part, so `2.0`
/// and the integer `2` land in different buckets.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{:?}", x),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Per-document field values.
pub type Fields = BTreeMap<String, FieldValue>;

/// A filter on one field: exact match against a scalar, or membership in a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    AnyOf(Vec<FieldValue>),
    Exact(FieldValue),
}

impl FilterValue {
    /// Does a document's value for this field satisfy the filter?
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match self {
            FilterValue::Exact(expected) => expected == value,
            FilterValue::AnyOf(options) => options.iter().any(|o| o == value),
        }
    }
}

macro_rules! exact_filter_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FilterValue {
                fn from(value: $ty) -> Self {
                    FilterValue::Exact(value.into())
                }
            }
        )*
    };
}

exact_filter_from!(FieldValue, &str, String, i64, f64, bool);

impl From<Vec<FieldValue>> for FilterValue {
    fn from(values: Vec<FieldValue>) -> Self {
        FilterValue::AnyOf(values)
    }
}

/// Field name to filter, all of which must hold.
pub type Filters = BTreeMap<String, FilterValue>;

// =============================================================================
// QUERIES
// =============================================================================

/// How per-term candidate sets combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Union: any term matches.
    Any,
    /// Intersection: every term matches.
    #[default]
    All,
    /// Every term, at consecutive positions, in query order.
    Phrase,
}

/// Request a facet histogram over one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetConfig {
    pub field: String,
    #[serde(default = "default_facet_size")]
    pub size: usize,
    #[serde(default = "default_facet_min_count")]
    pub min_count: usize,
}

fn default_facet_size() -> usize {
    10
}

fn default_facet_min_count() -> usize {
    1
}

impl FacetConfig {
    /// Facet on `field` with the default size (10) and min_count (1).
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            size: default_facet_size(),
            min_count: default_facet_min_count(),
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One bucket of a facet histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub value: String,
    pub count: usize,
}

/// A single ranked match.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<T> {
    pub document: T,
    pub doc_id: String,
    pub score: f64,
    /// Snippets keyed by source field (always `"content"` when present).
    pub highlights: BTreeMap<String, Vec<String>>,
    /// The document's field values.
    pub metadata: BTreeMap<String, serde_json::Value>,
}

/// A page of hits plus everything computed over the full match set.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<T> {
    pub hits: Vec<SearchHit<T>>,
    /// Matches before pagination.
    pub total: usize,
    pub took_ms: f64,
    /// Buckets per requested field, most frequent first.
    pub facets: BTreeMap<String, Vec<FacetBucket>>,
    /// "Did you mean" terms from the fuzzy fallback.
    pub suggestions: Vec<String>,
}

impl<T> SearchResult<T> {
    /// The empty result: no hits, no time spent.
    pub fn empty() -> Self {
        Self {
            hits: Vec::new(),
            total: 0,
            took_ms: 0.0,
            facets: BTreeMap::new(),
            suggestions: Vec::new(),
        }
    }

    /// Facets as `field -> value -> count`, dropping the bucket order.
    pub fn facet_counts(&self) -> BTreeMap<String, BTreeMap<String, usize>> {
        self.facets
            .iter()
            .map(|(field, buckets)| {
                let counts = buckets.iter().map(|b| (b.value.clone(), b.count)).collect();
                (field.clone(), counts)
            })
            .collect()
    }

    /// Ids of the hits on this page, in rank order.
    pub fn doc_ids(&self) -> Vec<&str> {
        self.hits.iter().map(|h| h.doc_id.as_str()).collect()
    }
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
