// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The structured form of a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub terms: Vec<String>,
    pub phrases: Vec<String>,
    pub required: Vec<String>,
    pub excluded: Vec<String>,
    pub field_queries: BTreeMap<String, String>,
}

impl ParsedQuery {
    /// Nothing to search for and nothing to filter on.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
            && self.phrases.is_empty()
            && self.required.is_empty()
            && self.excluded.is_empty()
            && self.field_queries.is_empty()
    }

    /// The words the index should match: terms, then required, then every
    /// phrase's words in order.
    pub fn search_terms(&self) -> Vec<String> {
        self.terms
            .iter()
            .chain(&self.required)
            .cloned()
            .chain(
                self.phrases
                    .iter()
                    .flat_map(|p| p.split_whitespace().map(str::to_string)),
            )
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, query: &str) -> ParsedQuery {
        let (phrases, remainder) = extract_phrases(query);
        let mut parsed = ParsedQuery {
            phrases,
            ..ParsedQuery::default()
        };

        for token in remainder.split_whitespace() {
            if let Some((name, value)) = token.split_once(':') {
                // Either side may be empty; such a filter simply matches nothing
                parsed.field_queries.insert(name.to_string(), value.to_string());
            } else if let Some(rest) = token.strip_prefix('+') {
                if !rest.is_empty() {
                    parsed.required.push(rest.to_string());
                }
            } else if let Some(rest) = token.strip_prefix('-') {
                if !rest.is_empty() {
                    parsed.excluded.push(rest.to_string());
                }
            } else {
                parsed.terms.push(token.to_string());
            }
        }

        parsed
    }
}

/// Pull every `"..."` span out of the query.
///
/// Returns the phrases (inner text untouched) and the query with each span
/// replaced by a space. A quote with no partner is dropped; the text after it
/// stays in the remainder. Empty or all-whitespace phrases are discarded.
fn extract_phrases(query: &str) -> (Vec<String>, String) {
    let mut phrases = Vec::new();
    let mut remainder = String::with_capacity(query.len());
    let mut rest = query;

    while let Some(open) = rest.find('"') {
        remainder.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find('"') {
            Some(close) => {
                let phrase = &after_open[..close];
                if !phrase.trim().is_empty() {
                    phrases.push(phrase.to_string());
                }
                remainder.push(' ');
                rest = &after_open[close + 1..];
            }
            None => {
                // Unterminated: drop the quote, keep its content as plain text
                remainder.push(' ');
                rest = after_open;
                break;
            }
        }
    }
    remainder.push_str(rest);

    (phrases, remainder)
}
