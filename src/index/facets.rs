// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet histograms.
//!
//! Computed over the full matched set, not the current page, so the counts
//! stay stable while a user pages through results.

use crate::types::{FacetBucket, FacetConfig, FieldValue};
use std::collections::HashMap;

/// Histogram of `value.to_string() -> count`, trimmed and sorted.
///
/// Buckets under `min_count` are dropped. The rest sort by count descending,
/// then by value ascending so equal counts come back in a stable order, and
/// the list is cut to `size`.
pub fn histogram<'a, I>(values: I, config: &FacetConfig) -> Vec<FacetBucket>
where
    I: IntoIterator<Item = &'a FieldValue>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value.to_string()).or_default() += 1;
    }

    let mut buckets: Vec<FacetBucket> = counts
        .into_iter()
        .filter(|(_, count)| *count >= config.min_count)
        .map(|(value, count)| FacetBucket { value, count })
        .collect();

    buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    buckets.truncate(config.size);
    buckets
}
