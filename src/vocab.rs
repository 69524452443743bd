//! Vocabulary frequency counts over token streams

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Token frequency counts aggregated across many messages.
///
/// A pure reduction over token streams: each token increments its count,
/// with no dependency on per-message boundaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    counts: HashMap<String, u64>,
    total: u64,
}

impl Vocabulary {
    /// Create an empty vocabulary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a token stream into the counts
    pub fn add_tokens<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for token in tokens {
            *self.counts.entry(token.into()).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Count recorded for one token
    #[must_use]
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens seen
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of tokens folded in, duplicates included
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Check whether no tokens have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent tokens, highest count first. Ties break on
    /// the token itself so the ranking is deterministic.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(token, count)| (token.clone(), *count))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}
