// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-string parsing.
//!
//! A tiny grammar, applied in a fixed order:
//!
//! ```text
//! "quoted phrase"   → phrases        (extracted first, removed from the text)
//! field:value       → field_queries  (split on the first ':')
//! +word             → required
//! -word             → excluded
//! word              → terms
//! ```
//!
//! Phrases come out before anything else is classified, so a quoted
//! `"-not excluded"` stays a phrase. Malformed input never errors: an
//! unterminated quote is dropped and whatever followed it parses as ordinary
//! tokens.

mod parser;

pub use parser::{ParsedQuery, QueryParser};
