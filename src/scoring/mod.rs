// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how hits get their numbers and their order.
//!
//! BM25 with fixed constants produces the number. Ranking sorts by it, and
//! breaks ties by doc id so the same query over the same corpus always
//! returns the same page.

mod bm25;
pub mod ranking;

pub use bm25::*;
