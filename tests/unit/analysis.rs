//! Tokenizers, filters and analyzers through the public API.

use sift::analysis::{
    AsciiFoldingFilter, EdgeNGramTokenizer, MaxLengthFilter, NGramTokenizer, SimpleTokenizer,
    StopWordFilter, WhitespaceTokenizer,
};
use sift::{Analyzer, AnalyzerConfig, Error, FilterConfig, Tokenizer, TokenizerConfig};

#[test]
fn test_default_analyzer_is_simple() {
    let tokens = Analyzer::default().analyze("The Quick-Brown FOX jumps!");
    assert_eq!(tokens, vec!["quick", "brown", "fox", "jumps"]);
}

#[test]
fn test_simple_splits_on_punctuation_and_keeps_digits() {
    let tokens = SimpleTokenizer::default().tokenize("v2.0 release_notes (2024)");
    assert_eq!(tokens, vec!["v2", "release", "notes", "2024"]);
}

#[test]
fn test_simple_normalizes_compatibility_forms() {
    // Fullwidth letters fold to ASCII under NFKC
    let tokens = SimpleTokenizer::default().tokenize("ＲＵＳＴ");
    if cfg!(feature = "unicode-normalization") {
        assert_eq!(tokens, vec!["rust"]);
    } else {
        assert_eq!(tokens.len(), 1);
    }
}

#[test]
fn test_whitespace_tokenizer_keeps_stop_words() {
    assert_eq!(
        WhitespaceTokenizer.tokenize("The a AN"),
        vec!["the", "a", "an"]
    );
}

#[test]
fn test_ngram_grouped_by_length() {
    let tokens = NGramTokenizer::new(1, 2).unwrap().tokenize("abc");
    assert_eq!(tokens, vec!["a", "b", "c", "ab", "bc"]);
}

#[test]
fn test_edge_ngram_per_word() {
    let tokens = EdgeNGramTokenizer::new(2, 3).unwrap().tokenize("Quick a Fox");
    assert_eq!(tokens, vec!["qu", "qui", "fo", "fox"]);
}

#[test]
fn test_invalid_ngram_ranges() {
    assert!(matches!(
        NGramTokenizer::new(0, 3),
        Err(Error::InvalidNgramRange { min_n: 0, max_n: 3 })
    ));
    assert!(matches!(
        EdgeNGramTokenizer::new(4, 2),
        Err(Error::InvalidNgramRange { min_n: 4, max_n: 2 })
    ));
}

#[test]
fn test_filters_run_in_order() {
    let analyzer = Analyzer::new(WhitespaceTokenizer)
        .with_filter(StopWordFilter)
        .with_filter(MaxLengthFilter(4))
        .with_filter(|t: String| Some(t.replace('o', "0")));
    assert_eq!(analyzer.analyze("the quick fox is cool"), vec!["f0x", "c00l"]);
}

#[test]
fn test_drop_removes_position() {
    // A dropped token leaves no gap in the output stream
    let analyzer = Analyzer::new(WhitespaceTokenizer).with_filter(StopWordFilter);
    assert_eq!(analyzer.analyze("fox and dog"), vec!["fox", "dog"]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_ascii_folding_in_pipeline() {
    let analyzer = Analyzer::new(WhitespaceTokenizer).with_filter(AsciiFoldingFilter);
    assert_eq!(analyzer.analyze("Café naïve"), vec!["cafe", "naive"]);
}

#[test]
fn test_analyzer_from_config() {
    let config = AnalyzerConfig {
        tokenizer: TokenizerConfig::Whitespace,
        filters: vec![FilterConfig::StopWords, FilterConfig::MinLength { min: 4 }],
    };
    let analyzer = Analyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.analyze("the lazy dog sleeps"), vec!["lazy", "sleeps"]);
}

#[test]
fn test_analyzer_from_invalid_config() {
    let config = AnalyzerConfig {
        tokenizer: TokenizerConfig::EdgeNGram { min_n: 0, max_n: 0 },
        filters: Vec::new(),
    };
    assert!(Analyzer::from_config(&config).is_err());
}
