// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase matching over positional postings.
//!
//! A document matches `t0 t1 ... tk` when some position `p` has `t0` at `p`,
//! `t1` at `p + 1`, and so on through `tk` at `p + k`.
//!
//! The walk is pairwise, left to right, but it carries positions forward
//! rather than just doc ids. For each surviving document we keep the set of
//! positions where the phrase-so-far *ends*. Extending by the next token keeps
//! only that token's positions whose predecessor is in the set. Checking bare
//! adjacency per pair is not enough: "a b ... b c" has both pairs adjacent but
//! no "a b c" anywhere.

use super::postings::Postings;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Documents containing `tokens` at consecutive positions, ascending by id.
///
/// Any token missing from the index means no document can match.
pub fn phrase_matches<'a>(
    postings: &'a HashMap<String, Postings>,
    tokens: &[String],
) -> BTreeSet<&'a str> {
    let Some((first, rest)) = tokens.split_first() else {
        return BTreeSet::new();
    };
    let Some(first) = postings.get(first) else {
        return BTreeSet::new();
    };

    // doc id -> positions where the matched prefix ends, ascending
    let mut frontier: BTreeMap<&'a str, Vec<u32>> = first
        .docs
        .iter()
        .map(|(doc_id, positions)| (doc_id.as_str(), positions.clone()))
        .collect();

    for token in rest {
        let Some(next) = postings.get(token) else {
            return BTreeSet::new();
        };

        frontier = frontier
            .into_iter()
            .filter_map(|(doc_id, ends)| {
                let positions = next.positions(doc_id)?;
                let extended = extend(&ends, positions);
                (!extended.is_empty()).then_some((doc_id, extended))
            })
            .collect();

        if frontier.is_empty() {
            break;
        }
    }

    frontier.into_keys().collect()
}

/// Positions in `next` immediately preceded by a position in `ends`.
///
/// Both inputs are sorted, so a single merge pass does it.
fn extend(ends: &[u32], next: &[u32]) -> Vec<u32> {
    let mut out = Vec::new();
    let mut i = 0;
    for &p in next {
        let Some(want) = p.checked_sub(1) else {
            continue;
        };
        while i < ends.len() && ends[i] < want {
            i += 1;
        }
        if i < ends.len() && ends[i] == want {
            out.push(p);
        }
    }
    out
}
