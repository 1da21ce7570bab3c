// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Ranked suggestions on top of prefix enumeration.
//!
//! Candidates are ranked by descending frequency, ties broken alphabetically.
//! When a prefix has no completions, a fuzzy pass retries every prefix at edit
//! distance one (substitution, insertion, deletion).

use std::collections::{BTreeMap, VecDeque};

use super::node::{index_symbol, ALPHABET_SIZE};
use super::{TrieStore, TrieStoreResult};

/// Options controlling how suggestions are gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Maximum number of suggestions returned
    pub limit: usize,

    /// Maximum number of candidates enumerated per prefix before ranking
    pub scan_limit: usize,

    /// Whether `autocomplete` falls back to fuzzy matching
    pub fuzzy: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            scan_limit: 100,
            fuzzy: true,
        }
    }
}

impl SuggestOptions {
    /// Sets the maximum number of suggestions returned.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the per-prefix candidate scan limit.
    pub fn with_scan_limit(mut self, scan_limit: usize) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    /// Enables or disables the fuzzy fallback.
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }
}

impl TrieStore {
    /// Returns the most frequent words starting with `prefix`.
    ///
    /// At most `scan_limit` candidates are considered, shortest completions
    /// first (breadth-first, alphabetical within a level),
    /// before ranking and truncating to `limit`.
    pub fn suggest<P>(&self, prefix: P, options: &SuggestOptions) -> TrieStoreResult<Vec<String>>
    where
        P: AsRef<str>,
    {
        let ranked = self.ranked_candidates(prefix.as_ref(), options)?;
        Ok(ranked.into_iter().map(|(word, _)| word).collect())
    }

    /// Suggests completions for every prefix within edit distance one of `prefix`.
    pub fn fuzzy_suggest<P>(
        &self,
        prefix: P,
        options: &SuggestOptions,
    ) -> TrieStoreResult<Vec<String>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let mut merged: BTreeMap<String, u64> = self
            .ranked_candidates(prefix, options)?
            .into_iter()
            .collect();

        for variant in edit_variants(prefix) {
            for (word, frequency) in self.ranked_candidates(&variant, options)? {
                merged.entry(word).or_insert(frequency);
            }
        }

        let mut candidates: Vec<(String, u64)> = merged.into_iter().collect();
        rank(&mut candidates);
        candidates.truncate(options.limit);

        tracing::debug!(prefix, found = candidates.len(), "Fuzzy suggestion pass");
        Ok(candidates.into_iter().map(|(word, _)| word).collect())
    }

    /// Suggests completions for `prefix`, falling back to fuzzy matching
    /// when there are none and `options.fuzzy` is set.
    pub fn autocomplete<P>(&self, prefix: P, options: &SuggestOptions) -> TrieStoreResult<Vec<String>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let suggestions = self.suggest(prefix, options)?;
        if suggestions.is_empty() && options.fuzzy {
            return self.fuzzy_suggest(prefix, options);
        }
        Ok(suggestions)
    }

    fn ranked_candidates(
        &self,
        prefix: &str,
        options: &SuggestOptions,
    ) -> TrieStoreResult<Vec<(String, u64)>> {
        let mut candidates = self.breadth_first_candidates(prefix, options.scan_limit)?;
        rank(&mut candidates);
        candidates.truncate(options.limit);
        Ok(candidates)
    }

    /// Collects up to `scan_limit` stored words under `prefix`, level by level.
    fn breadth_first_candidates(
        &self,
        prefix: &str,
        scan_limit: usize,
    ) -> TrieStoreResult<Vec<(String, u64)>> {
        let Some(start) = self.find_node(prefix)? else {
            return Ok(Vec::new());
        };

        let mut candidates = Vec::new();
        let mut queue = VecDeque::from([(start, prefix.to_string())]);

        while candidates.len() < scan_limit {
            let Some((id, word)) = queue.pop_front() else {
                break;
            };
            let node = &self.nodes[id.index()];

            for (symbol, child) in node.children() {
                let mut next = word.clone();
                next.push(symbol);
                queue.push_back((child, next));
            }

            if node.is_terminal {
                candidates.push((word, node.frequency));
            }
        }

        Ok(candidates)
    }
}

fn rank(candidates: &mut [(String, u64)]) {
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
}

/// Every string at edit distance one from `prefix` over `a..=z`.
///
/// `prefix` must already be validated; it is treated as ASCII.
fn edit_variants(prefix: &str) -> Vec<String> {
    let len = prefix.len();
    let mut variants = Vec::with_capacity(len + (2 * len + 1) * ALPHABET_SIZE);

    for i in 0..len {
        variants.push(format!("{}{}", &prefix[..i], &prefix[i + 1..]));
    }

    for symbol in (0..ALPHABET_SIZE).map(index_symbol) {
        for i in 0..len {
            if prefix.as_bytes()[i] != symbol as u8 {
                variants.push(format!("{}{}{}", &prefix[..i], symbol, &prefix[i + 1..]));
            }
        }
        for i in 0..=len {
            variants.push(format!("{}{}{}", &prefix[..i], symbol, &prefix[i..]));
        }
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_store() -> TrieStore {
        let mut store = TrieStore::new();
        for (word, frequency) in [
            ("car", 40),
            ("card", 15),
            ("care", 40),
            ("cart", 3),
            ("cat", 90),
            ("dog", 7),
        ] {
            store.insert_with_frequency(word, frequency).unwrap();
        }
        store
    }

    #[test]
    fn test_suggest_ranks_by_frequency() {
        let store = weighted_store();
        let options = SuggestOptions::default().with_limit(3);

        assert_eq!(
            store.suggest("ca", &options).unwrap(),
            vec!["cat", "car", "care"]
        );
        assert!(store.suggest("x", &options).unwrap().is_empty());
    }

    #[test]
    fn test_suggest_respects_scan_limit() {
        let store = weighted_store();
        // Only the two shortest completions, "car" and "cat", are scanned.
        let options = SuggestOptions::default().with_scan_limit(2);

        assert_eq!(store.suggest("ca", &options).unwrap(), vec!["cat", "car"]);
    }

    #[test]
    fn test_suggest_prefers_short_frequent_words() {
        let mut store = TrieStore::new();
        for word in (0..200).map(|i| {
            format!("aa{}{}", index_symbol(i / ALPHABET_SIZE), index_symbol(i % ALPHABET_SIZE))
        }) {
            store.insert(word).unwrap();
        }
        store.insert_with_frequency("an", 1000).unwrap();

        let suggestions = store.suggest("a", &SuggestOptions::default()).unwrap();
        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[0], "an");
        assert_eq!(suggestions[1], "aaaa");
    }

    #[test]
    fn test_fuzzy_suggest_recovers_typos() {
        let store = weighted_store();
        let options = SuggestOptions::default();

        // Substitution
        assert!(store.fuzzy_suggest("dag", &options).unwrap().contains(&"dog".to_string()));
        // Deletion of an extra symbol
        assert!(store.fuzzy_suggest("doog", &options).unwrap().contains(&"dog".to_string()));
        // Insertion of a missing symbol
        assert!(store.fuzzy_suggest("dg", &options).unwrap().contains(&"dog".to_string()));
    }

    #[test]
    fn test_autocomplete_falls_back_to_fuzzy() {
        let store = weighted_store();

        let options = SuggestOptions::default();
        assert_eq!(store.autocomplete("dox", &options).unwrap(), vec!["dog"]);
        assert_eq!(store.autocomplete("do", &options).unwrap(), vec!["dog"]);

        let strict = options.with_fuzzy(false);
        assert!(store.autocomplete("dox", &strict).unwrap().is_empty());
    }

    #[test]
    fn test_suggest_rejects_invalid_prefix() {
        let store = weighted_store();
        let options = SuggestOptions::default();

        assert!(store.suggest("Ca", &options).unwrap_err().is_invalid_symbol());
        assert!(store.autocomplete("c4", &options).is_err());
    }

    #[test]
    fn test_edit_variants() {
        let variants = edit_variants("ab");
        assert!(variants.contains(&"b".to_string()));
        assert!(variants.contains(&"a".to_string()));
        assert!(variants.contains(&"zb".to_string()));
        assert!(variants.contains(&"abz".to_string()));
        assert!(variants.contains(&"cab".to_string()));
        assert!(!variants.contains(&"ab".to_string()));

        assert_eq!(edit_variants("").len(), ALPHABET_SIZE);
    }
}
