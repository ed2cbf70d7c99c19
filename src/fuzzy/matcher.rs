// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The "did you mean" matcher.

use super::levenshtein::{levenshtein, levenshtein_within};

/// Stateless edit-distance utility used for the zero-hit fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyMatcher;

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Levenshtein distance between two strings.
    pub fn distance(&self, s1: &str, s2: &str) -> usize {
        levenshtein(s1, s2)
    }

    /// Is `s2` within `max_distance` edits of `s1`?
    pub fn matches(&self, s1: &str, s2: &str, max_distance: usize) -> bool {
        self.within(s1, s2, max_distance)
    }

    /// Bounded check that bails out on length difference or once a whole
    /// DP row exceeds `max`, without finishing the full distance.
    #[inline]
    pub fn within(&self, a: &str, b: &str, max: usize) -> bool {
        levenshtein_within(a, b, max)
    }

    /// Candidates within `max_distance` of `query`, closest first.
    ///
    /// The sort is stable, so candidates at equal distance keep the order they
    /// were supplied in. At most `limit` pairs come back.
    pub fn find_closest<'a, I>(
        &self,
        query: &str,
        candidates: I,
        max_distance: usize,
        limit: usize,
    ) -> Vec<(&'a str, usize)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut close: Vec<(&'a str, usize)> = candidates
            .into_iter()
            .filter(|candidate| levenshtein_within(query, candidate, max_distance))
            .map(|candidate| (candidate, levenshtein(query, candidate)))
            .collect();

        close.sort_by_key(|&(_, distance)| distance);
        close.truncate(limit);
        close
    }
}
