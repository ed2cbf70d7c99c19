// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field filters.

use crate::types::{Fields, Filters};

/// Does a document's field map satisfy every filter?
///
/// A field the document lacks fails the filter. There is no separate check
/// for "field exists nowhere in the index"; it just fails for every document.
pub fn passes(fields: &Fields, filters: &Filters) -> bool {
    filters.iter().all(|(name, filter)| {
        fields
            .get(name)
            .is_some_and(|value| filter.accepts(value))
    })
}
