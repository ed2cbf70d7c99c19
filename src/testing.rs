// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::engine::SearchEngine;
use crate::index::InvertedIndex;
use crate::types::{FieldValue, Fields};

/// Build a field map from `(name, value)` pairs.
pub fn fields<V: Into<FieldValue> + Clone>(pairs: &[(&str, V)]) -> Fields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone().into()))
        .collect()
}

/// Index over `(doc_id, text)` pairs; each text is its own payload.
pub fn text_index(docs: &[(&str, &str)]) -> InvertedIndex<String> {
    let mut index = InvertedIndex::new();
    for (doc_id, text) in docs {
        index.add_text(*doc_id, text, Fields::new());
    }
    index
}

/// Engine over `(doc_id, text)` pairs; each text is its own payload.
pub fn text_engine(docs: &[(&str, &str)]) -> SearchEngine<String> {
    let mut engine = SearchEngine::new();
    for (doc_id, text) in docs {
        engine.index(*doc_id, text.to_string(), text, Fields::new());
    }
    engine
}
