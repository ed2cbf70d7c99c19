// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet highlighting.
//!
//! Works on the stored original text split on whitespace, using the analyzed
//! token positions recorded at index time as word indices. The two line up
//! for plain prose; when the analyzer dropped or split tokens they drift, and
//! a position past the end of the text is skipped rather than guessed at.

use crate::config::HighlightConfig;

/// Up to `max_snippets` distinct windows of `window` words either side of
/// each position, with the matched word wrapped in the configured tags.
pub fn snippets<I>(text: &str, positions: I, config: &HighlightConfig) -> Vec<String>
where
    I: IntoIterator<Item = u32>,
{
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut out: Vec<String> = Vec::new();

    for pos in positions {
        if out.len() >= config.max_snippets {
            break;
        }
        let pos = pos as usize;
        if pos >= words.len() {
            continue;
        }

        let start = pos.saturating_sub(config.window);
        let end = (pos + config.window + 1).min(words.len());
        let snippet = words[start..end]
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if start + i == pos {
                    format!("{}{}{}", config.pre_tag, word, config.post_tag)
                } else {
                    (*word).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        if !out.contains(&snippet) {
            out.push(snippet);
        }
    }

    out
}
