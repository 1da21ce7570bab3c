// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Bigram Next-Word Model
//!
//! This module counts how often one word follows another and combines those
//! counts with prefix completion over every word seen in the second
//! position. It backs the "predict as you type" query: a finished word asks
//! for likely followers, a word still being typed asks for completions.

use std::collections::BTreeMap;

use super::trie_store::{SuggestOptions, TrieStore, TrieStoreConfig, TrieStoreResult};

/// Default number of predictions returned.
pub const DEFAULT_TOP_K: usize = 5;

/// Word pair counts plus a vocabulary of predicted words.
///
/// Every word recorded in the second position of a pair is inserted into
/// the vocabulary with the pair count as its frequency, so prefix
/// predictions favour words that follow many others.
#[derive(Debug, Clone)]
pub struct BigramModel {
    /// `prev -> next -> count`
    counts: BTreeMap<String, BTreeMap<String, u64>>,

    /// Words seen in the second position of a pair
    vocabulary: TrieStore,

    /// Number of distinct pairs
    pairs: usize,
}

impl Default for BigramModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BigramModel {
    /// Creates an empty model with an unbounded vocabulary.
    pub fn new() -> Self {
        Self::with_config(TrieStoreConfig::default())
    }

    /// Creates an empty model whose vocabulary uses `config`.
    pub fn with_config(config: TrieStoreConfig) -> Self {
        Self {
            counts: BTreeMap::new(),
            vocabulary: TrieStore::with_config(config),
            pairs: 0,
        }
    }

    /// Records that `next` followed `prev` `count` times.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the pair was not recorded before.
    /// * `Err(TrieStoreError)` - If either word is rejected by the vocabulary
    ///   rules. Nothing is modified.
    pub fn record<P, N>(&mut self, prev: P, next: N, count: u64) -> TrieStoreResult<bool>
    where
        P: AsRef<str>,
        N: AsRef<str>,
    {
        let (prev, next) = (prev.as_ref(), next.as_ref());
        TrieStore::validate_word(prev)?;
        self.vocabulary.insert_with_frequency(next, count)?;

        let followers = self.counts.entry(prev.to_string()).or_default();
        let is_new = !followers.contains_key(next);
        let total = followers.entry(next.to_string()).or_insert(0);
        *total = total.saturating_add(count);

        if is_new {
            self.pairs += 1;
        }
        tracing::trace!(prev, next, count, "Recorded word pair");
        Ok(is_new)
    }

    /// Returns the accumulated count of the pair `prev next`.
    pub fn pair_count(&self, prev: &str, next: &str) -> u64 {
        self.counts
            .get(prev)
            .and_then(|followers| followers.get(next))
            .copied()
            .unwrap_or(0)
    }

    /// Returns up to `top_k` words seen after `prev`, most frequent first.
    ///
    /// Equal counts are ordered alphabetically. An unknown `prev` yields
    /// nothing.
    pub fn predict_next_word(&self, prev: &str, top_k: usize) -> Vec<String> {
        let Some(followers) = self.counts.get(prev) else {
            return Vec::new();
        };

        let mut ranked: Vec<(&String, u64)> = followers
            .iter()
            .map(|(word, count)| (word, *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        ranked
            .into_iter()
            .take(top_k)
            .map(|(word, _)| word.clone())
            .collect()
    }

    /// Returns up to `top_k` vocabulary words starting with `prefix`.
    pub fn predict_prefix(&self, prefix: &str, top_k: usize) -> TrieStoreResult<Vec<String>> {
        let options = SuggestOptions::default()
            .with_limit(top_k)
            .with_fuzzy(false);
        let options = options.with_scan_limit(options.scan_limit.max(top_k));
        self.vocabulary.suggest(prefix, &options)
    }

    /// Predicts words for partially typed input.
    ///
    /// * No words: nothing.
    /// * One word: its followers, or its completions when it has none.
    /// * Several words: followers of the second-to-last word, then
    ///   completions of the last word, without repeats, cut to `top_k`.
    ///
    /// Words are separated by whitespace. A context word with a symbol
    /// outside `a..=z` is an error.
    pub fn hybrid_predict(&self, input: &str, top_k: usize) -> TrieStoreResult<Vec<String>> {
        let words: Vec<&str> = input.split_whitespace().collect();

        let predictions = match words.as_slice() {
            [] => Vec::new(),
            [word] => {
                TrieStore::validate_word(word)?;
                let followers = self.predict_next_word(word, top_k);
                if followers.is_empty() {
                    self.predict_prefix(word, top_k)?
                } else {
                    followers
                }
            }
            [.., prev, prefix] => {
                TrieStore::validate_word(prev)?;
                let mut combined = self.predict_next_word(prev, top_k);
                for word in self.predict_prefix(prefix, top_k)? {
                    if !combined.contains(&word) {
                        combined.push(word);
                    }
                }
                combined.truncate(top_k);
                combined
            }
        };

        tracing::debug!(input, found = predictions.len(), "Hybrid prediction");
        Ok(predictions)
    }

    /// Returns the vocabulary of predicted words.
    pub fn vocabulary(&self) -> &TrieStore {
        &self.vocabulary
    }

    /// Returns the number of distinct word pairs.
    pub fn len(&self) -> usize {
        self.pairs
    }

    /// Returns `true` if no pair has been recorded.
    pub fn is_empty(&self) -> bool {
        self.pairs == 0
    }
}
