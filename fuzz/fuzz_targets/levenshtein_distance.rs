// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Checks the metric axioms and that the bounded check agrees with the full
//! distance at every threshold. If the early exits are wrong, "did you mean"
//! silently stops suggesting things.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{levenshtein, levenshtein_within};

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

/// Keep the O(nm) DP cheap.
fn cap(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: DistanceInput| {
    let (a, b, c) = (cap(&input.a), cap(&input.b), cap(&input.c));
    let max = usize::from(input.max % 16);

    let ab = levenshtein(&a, &b);

    // Identity and symmetry
    assert_eq!(levenshtein(&a, &a), 0);
    assert_eq!(ab, levenshtein(&b, &a));

    // Bounds
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(ab >= la.abs_diff(lb));
    assert!(ab <= la.max(lb));

    // Triangle inequality
    assert!(ab <= levenshtein(&a, &c) + levenshtein(&c, &b));

    // Bounded check agrees with the full distance
    assert_eq!(
        levenshtein_within(&a, &b, max),
        ab <= max,
        "a={:?} b={:?} distance={} max={}",
        a,
        b,
        ab,
        max
    );
});
