//! Tokenization and stemming of normalized text

use rust_stemmers::{Algorithm, Stemmer};

/// Splits normalized text into stemmed word tokens.
///
/// Candidates are whitespace-separated runs; each is stripped of any
/// character outside `[A-Za-z0-9]` (Unicode punctuation can survive the
/// ASCII punctuation pass), lowercased, and reduced with the Snowball
/// English stemmer. Empty results are discarded. Output order mirrors
/// input order and duplicates are preserved — downstream frequency
/// counting depends on both.
pub struct Tokenizer {
    stemmer: Stemmer,
}

impl Tokenizer {
    /// Create a tokenizer with the English stemming ruleset
    #[must_use]
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Tokenize normalized text into stemmed tokens.
    ///
    /// Every returned token matches `[a-z0-9]+`. Total over any input;
    /// degenerate input yields an empty stream.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|candidate| self.stem_candidate(candidate))
            .collect()
    }

    /// Tokenize and space-join, the legacy pipeline's single-string form.
    /// Token content and order are identical to [`Self::tokenize`].
    #[must_use]
    pub fn tokenize_joined(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }

    fn stem_candidate(&self, candidate: &str) -> Option<String> {
        let cleaned: String = candidate
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();

        if cleaned.is_empty() {
            return None;
        }

        let stemmed = self.stemmer.stem(&cleaned).to_string();
        if stemmed.is_empty() { None } else { Some(stemmed) }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
