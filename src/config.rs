// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Plain serde structs with defaults for every field, so a host can load a
//! partial JSON document and get sensible behavior for whatever it leaves out.
//! Ranking constants are deliberately absent: BM25 runs with fixed parameters.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Which tokenizer the analyzer starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Normalize, lowercase, split on non-alphanumerics, drop short and stop words.
    Simple {
        #[serde(default = "default_min_token_length")]
        min_token_length: usize,
    },
    /// Lowercase and split on whitespace; nothing is dropped.
    Whitespace,
    /// Every character n-gram of the lowercased text.
    #[serde(rename = "ngram")]
    NGram { min_n: usize, max_n: usize },
    /// Every prefix of every word, for autocomplete.
    #[serde(rename = "edge_ngram")]
    EdgeNGram { min_n: usize, max_n: usize },
}

fn default_min_token_length() -> usize {
    2
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig::Simple {
            min_token_length: default_min_token_length(),
        }
    }
}

/// Built-in token filters, applied in order after tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterConfig {
    Lowercase,
    AsciiFolding,
    StopWords,
    MinLength { min: usize },
    MaxLength { max: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub tokenizer: TokenizerConfig,
    pub filters: Vec<FilterConfig>,
}

/// Snippet formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub pre_tag: String,
    pub post_tag: String,
    /// Words kept on each side of the match.
    pub window: usize,
    /// Distinct snippets per hit.
    pub max_snippets: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            pre_tag: "**".to_string(),
            post_tag: "**".to_string(),
            window: 3,
            max_snippets: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub analyzer: AnalyzerConfig,
    pub highlight: HighlightConfig,
    /// Cap on pooled fuzzy "did you mean" suggestions.
    pub max_suggestions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerConfig::default(),
            highlight: HighlightConfig::default(),
            max_suggestions: 5,
        }
    }
}

impl EngineConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
