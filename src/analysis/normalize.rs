// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unicode normalization helpers.
//!
//! Two flavors. [`normalize_lowercase`] is what the simple tokenizer runs
//! before splitting: NFKC folds compatibility forms ("ﬁ" → "fi", fullwidth
//! digits → ASCII) so visually identical text indexes identically.
//! [`fold_diacritics`] goes further and strips accents ("café" → "cafe"); it
//! backs the ascii-folding filter and is never applied implicitly.
//!
//! Without the `unicode-normalization` feature both degrade to lowercasing
//! only, which is correct for ASCII input.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize and lowercase.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_lowercase(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Strip combining marks after NFD decomposition.
///
/// - "café" → "cafe"
/// - "naïve" → "naive"
/// - "tummalachērla" → "tummalacherla"
#[cfg(feature = "unicode-normalization")]
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_diacritics(text: &str) -> String {
    text.to_string()
}

/// Nonspacing marks from the combining blocks that show up in Latin text.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
