// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: turning prose into the terms the index stores.
//!
//! A tokenizer splits, filters rewrite or drop, and the analyzer glues the two
//! together. Indexing and querying run through the same analyzer, which is
//! the only reason a query for "Quick" finds a document that says "quick".

mod analyzer;
pub mod filters;
mod normalize;
mod stop_words;
mod tokenizer;

pub use analyzer::Analyzer;
pub use filters::{
    AsciiFoldingFilter, LowercaseFilter, MaxLengthFilter, MinLengthFilter, StopWordFilter,
    TokenFilter,
};
pub use normalize::{fold_diacritics, normalize_lowercase};
pub use stop_words::is_stop_word;
pub use tokenizer::{
    EdgeNGramTokenizer, NGramTokenizer, SimpleTokenizer, Tokenizer, WhitespaceTokenizer,
};
