// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query grammar.
//!
//! Unbalanced quotes, stray colons, lone signs. The parser has no error path,
//! so every input must come back as a well-formed `ParsedQuery`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::QueryParser;

fuzz_target!(|query: &str| {
    let parsed = QueryParser::new().parse(query);

    // INVARIANT 1: no empty clauses
    assert!(parsed.terms.iter().all(|t| !t.is_empty()));
    assert!(parsed.required.iter().all(|t| !t.is_empty()));
    assert!(parsed.excluded.iter().all(|t| !t.is_empty()));
    assert!(parsed.phrases.iter().all(|p| !p.trim().is_empty()));

    // INVARIANT 2: colons only survive in field values, never in names or terms
    for name in parsed.field_queries.keys() {
        assert!(!name.contains(':'), "name {:?}", name);
    }
    for token in parsed.terms.iter().chain(&parsed.required).chain(&parsed.excluded) {
        assert!(!token.contains(':'), "token {:?}", token);
    }

    // INVARIANT 3: only phrases can contain whitespace or quotes
    for token in parsed.terms.iter().chain(&parsed.required).chain(&parsed.excluded) {
        assert!(!token.contains(char::is_whitespace), "token {:?}", token);
        assert!(!token.contains('"'), "token {:?}", token);
    }

    // INVARIANT 4: parsing is deterministic
    assert_eq!(parsed, QueryParser::new().parse(query));
});
