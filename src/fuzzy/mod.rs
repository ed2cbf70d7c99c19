// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two entry points. [`levenshtein`] computes the exact distance for ranking
//! candidates; [`levenshtein_within`] answers "close enough?" and bails out
//! early when it can prove the answer is no. [`FuzzyMatcher`] wraps both
//! behind the "did you mean" API the engine uses.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::FuzzyMatcher;
