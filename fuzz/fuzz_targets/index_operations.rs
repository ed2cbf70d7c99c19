// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index mutation.
//!
//! Arbitrary interleavings of add, re-add and remove, with a full structural
//! validation after every step. Catches stale postings, empty terms left
//! behind and corpus statistics drifting from the documents actually present.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{validate_index, Fields, InvertedIndex};

#[derive(Debug, Arbitrary)]
enum Op {
    Add { id: u8, text: String },
    Remove { id: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut index: InvertedIndex<String> = InvertedIndex::new();

    for op in ops.into_iter().take(64) {
        match op {
            Op::Add { id, text } => {
                let text: String = text.chars().take(256).collect();
                index.add_text(format!("d{}", id % 16), &text, Fields::new());
            }
            Op::Remove { id } => {
                let id = format!("d{}", id % 16);
                let present = index.contains(&id);
                assert_eq!(index.remove_document(&id), present);
                assert!(!index.remove_document(&id));
            }
        }

        if let Err(violation) = validate_index(&index) {
            panic!("invariant violated: {}", violation);
        }
    }
});
