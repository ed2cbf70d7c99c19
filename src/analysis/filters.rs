// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token filters: one token in, one token (or nothing) out.
//!
//! Any `Fn(String) -> Option<String>` is a filter, so ad hoc rules don't need
//! a named type. The built-ins cover what the config file can ask for.

use super::normalize::fold_diacritics;
use super::stop_words::is_stop_word;
use crate::config::FilterConfig;

/// Map a token to a (possibly rewritten) token, or `None` to drop it.
pub trait TokenFilter: Send + Sync {
    fn apply(&self, token: String) -> Option<String>;
}

impl<F> TokenFilter for F
where
    F: Fn(String) -> Option<String> + Send + Sync,
{
    fn apply(&self, token: String) -> Option<String> {
        self(token)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn apply(&self, token: String) -> Option<String> {
        Some(token.to_lowercase())
    }
}

/// Strip diacritics: "café" → "cafe".
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFoldingFilter;

impl TokenFilter for AsciiFoldingFilter {
    fn apply(&self, token: String) -> Option<String> {
        if token.is_ascii() {
            return Some(token);
        }
        Some(fold_diacritics(&token))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StopWordFilter;

impl TokenFilter for StopWordFilter {
    fn apply(&self, token: String) -> Option<String> {
        (!is_stop_word(&token)).then_some(token)
    }
}

/// Drop tokens with fewer than `min` characters.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthFilter(pub usize);

impl TokenFilter for MinLengthFilter {
    fn apply(&self, token: String) -> Option<String> {
        (token.chars().count() >= self.0).then_some(token)
    }
}

/// Drop tokens with more than `max` characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLengthFilter(pub usize);

impl TokenFilter for MaxLengthFilter {
    fn apply(&self, token: String) -> Option<String> {
        (token.chars().count() <= self.0).then_some(token)
    }
}

/// Instantiate a configured filter.
pub fn from_config(config: &FilterConfig) -> Box<dyn TokenFilter> {
    match config {
        FilterConfig::Lowercase => Box::new(LowercaseFilter),
        FilterConfig::AsciiFolding => Box::new(AsciiFoldingFilter),
        FilterConfig::StopWords => Box::new(StopWordFilter),
        FilterConfig::MinLength { min } => Box::new(MinLengthFilter(*min)),
        FilterConfig::MaxLength { max } => Box::new(MaxLengthFilter(*max)),
    }
}
