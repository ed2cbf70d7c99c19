// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizers: raw text in, ordered tokens out.
//!
//! Positions are the indices of this output, and the index persists them for
//! phrase matching. So every tokenizer here must be a pure function of its
//! input: same text, same tokens, same order, every time.

use super::normalize::normalize_lowercase;
use super::stop_words::is_stop_word;
use crate::error::{Error, Result};

/// Split text into an ordered token sequence.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Word boundary: anything that is not a letter or digit.
#[inline]
fn is_word_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

fn check_ngram_range(min_n: usize, max_n: usize) -> Result<()> {
    if min_n == 0 || min_n > max_n {
        return Err(Error::InvalidNgramRange { min_n, max_n });
    }
    Ok(())
}

// =============================================================================
// SIMPLE
// =============================================================================

/// The default tokenizer for prose.
///
/// NFKC-normalize, lowercase, split on runs of non-alphanumeric characters,
/// then drop tokens shorter than `min_token_length` characters and stop words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleTokenizer {
    min_token_length: usize,
}

impl SimpleTokenizer {
    pub fn new(min_token_length: usize) -> Self {
        Self { min_token_length }
    }

    pub fn min_token_length(&self) -> usize {
        self.min_token_length
    }
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        normalize_lowercase(text)
            .split(is_word_boundary)
            .filter(|word| !word.is_empty())
            .filter(|word| word.chars().count() >= self.min_token_length)
            .filter(|word| !is_stop_word(word))
            .map(str::to_string)
            .collect()
    }
}

// =============================================================================
// WHITESPACE
// =============================================================================

/// Lowercase and split on whitespace. Punctuation stays attached; nothing is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

// =============================================================================
// N-GRAMS
// =============================================================================

/// Every contiguous character substring of length `min_n..=max_n`.
///
/// Runs over the whole lowercased text, so grams span word boundaries
/// ("ab cd" yields "b " and " c" at n=2). Grams are emitted grouped by
/// length: all of length `min_n` left to right, then `min_n + 1`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NGramTokenizer {
    min_n: usize,
    max_n: usize,
}

impl NGramTokenizer {
    pub fn new(min_n: usize, max_n: usize) -> Result<Self> {
        check_ngram_range(min_n, max_n)?;
        Ok(Self { min_n, max_n })
    }
}

impl Tokenizer for NGramTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        let mut grams = Vec::new();

        for n in self.min_n..=self.max_n {
            if n > chars.len() {
                break;
            }
            grams.extend(chars.windows(n).map(|w| w.iter().collect::<String>()));
        }

        grams
    }
}

/// Prefixes of each whitespace-delimited word, for autocomplete.
///
/// "quick" with `1..=4` yields "q", "qu", "qui", "quic". Words shorter than
/// `min_n` contribute nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeNGramTokenizer {
    min_n: usize,
    max_n: usize,
}

impl EdgeNGramTokenizer {
    pub fn new(min_n: usize, max_n: usize) -> Result<Self> {
        check_ngram_range(min_n, max_n)?;
        Ok(Self { min_n, max_n })
    }
}

impl Tokenizer for EdgeNGramTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut grams = Vec::new();

        for word in text.to_lowercase().split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            let upper = self.max_n.min(chars.len());
            for n in self.min_n..=upper {
                grams.push(chars[..n].iter().collect());
            }
        }

        grams
    }
}
