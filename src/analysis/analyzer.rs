// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Analyzer: a tokenizer followed by an ordered chain of filters.
//!
//! The analyzer's output is exactly what the index records positions for.
//! Positions are assigned after filtering, so a dropped token leaves no gap:
//! "fox and dog" indexes "fox"@0 and "dog"@1 once "and" is stopped.

use super::filters::{self, TokenFilter};
use super::tokenizer::{
    EdgeNGramTokenizer, NGramTokenizer, SimpleTokenizer, Tokenizer, WhitespaceTokenizer,
};
use crate::config::{AnalyzerConfig, TokenizerConfig};
use crate::error::Result;
use std::fmt;

pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer>,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    pub fn new(tokenizer: impl Tokenizer + 'static) -> Self {
        Self {
            tokenizer: Box::new(tokenizer),
            filters: Vec::new(),
        }
    }

    /// Append a filter. Filters run in the order they were added.
    pub fn with_filter(mut self, filter: impl TokenFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let tokenizer: Box<dyn Tokenizer> = match config.tokenizer {
            TokenizerConfig::Simple { min_token_length } => {
                Box::new(SimpleTokenizer::new(min_token_length))
            }
            TokenizerConfig::Whitespace => Box::new(WhitespaceTokenizer),
            TokenizerConfig::NGram { min_n, max_n } => Box::new(NGramTokenizer::new(min_n, max_n)?),
            TokenizerConfig::EdgeNGram { min_n, max_n } => {
                Box::new(EdgeNGramTokenizer::new(min_n, max_n)?)
            }
        };

        Ok(Self {
            tokenizer,
            filters: config.filters.iter().map(filters::from_config).collect(),
        })
    }

    /// Tokenize, then push each token through every filter in order.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter_map(|token| {
                self.filters
                    .iter()
                    .try_fold(token, |token, filter| filter.apply(token))
            })
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(SimpleTokenizer::default())
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("filters", &self.filters.len())
            .finish_non_exhaustive()
    }
}
