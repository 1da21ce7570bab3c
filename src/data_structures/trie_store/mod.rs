// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Trie Store Implementation
//!
//! This module provides a prefix tree over lowercase ASCII words with exact
//! lookup, prefix checks, and alphabetically ordered prefix enumeration.
//! Nodes are kept in an arena and refer to their children by index.

mod error;
mod iter;
mod node;
mod suggest;

pub use error::TrieStoreError;
pub use iter::{WordFrequencies, WordsWithPrefix};
pub use node::{NodeId, TrieNode, ALPHABET_SIZE};
pub use suggest::SuggestOptions;

use node::symbol_index;

/// Result type for trie store operations
pub type TrieStoreResult<T> = Result<T, TrieStoreError>;

/// Configuration options for the trie store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieStoreConfig {
    /// Maximum number of symbols in an inserted word (`None` for unbounded)
    max_word_len: Option<usize>,
}

impl TrieStoreConfig {
    /// Create a new default configuration with no word length limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inserted words longer than `max_word_len` symbols.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = Some(max_word_len);
        self
    }

    /// Returns the configured maximum word length, if any.
    pub fn max_word_len(&self) -> Option<usize> {
        self.max_word_len
    }
}

/// A prefix tree of lowercase words.
///
/// Key features:
/// * Exact word lookup and prefix existence checks
/// * Lazy prefix enumeration in alphabetical order
/// * Per-word frequencies for ranked suggestions
///
/// The empty word is a valid word: inserting `""` marks the root terminal.
#[derive(Debug, Clone)]
pub struct TrieStore {
    /// Node arena; index 0 is the root
    nodes: Vec<TrieNode>,

    /// Number of distinct stored words
    len: usize,

    /// Configuration options
    config: TrieStoreConfig,
}

impl TrieStore {
    /// Creates a new empty `TrieStore` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieStoreConfig::default())
    }

    /// Creates a new empty `TrieStore` with the specified configuration.
    pub fn with_config(config: TrieStoreConfig) -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            len: 0,
            config,
        }
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &TrieStoreConfig {
        &self.config
    }

    /// Inserts a word with frequency 1.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was not stored before.
    /// * `Err(TrieStoreError)` - If the word contains a symbol outside `a..=z`
    ///   or exceeds the configured maximum length. Nothing is modified.
    pub fn insert<W>(&mut self, word: W) -> TrieStoreResult<bool>
    where
        W: AsRef<str>,
    {
        self.insert_with_frequency(word, 1)
    }

    /// Inserts a word and adds `frequency` to its accumulated frequency.
    ///
    /// Re-inserting a stored word never changes the shape of the tree.
    pub fn insert_with_frequency<W>(&mut self, word: W, frequency: u64) -> TrieStoreResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let symbols = Self::symbols(word)?;

        if let Some(max_len) = self.config.max_word_len {
            if symbols.len() > max_len {
                return Err(TrieStoreError::WordTooLong {
                    len: symbols.len(),
                    max_len,
                });
            }
        }

        let mut current = NodeId::ROOT;
        for index in symbols {
            current = match self.nodes[current.index()].child(index) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::new());
                    self.nodes[current.index()].children[index] = Some(next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current.index()];
        let is_new = !node.is_terminal;
        node.is_terminal = true;
        node.frequency = node.frequency.saturating_add(frequency);

        if is_new {
            self.len += 1;
            tracing::debug!(word, frequency, nodes = self.nodes.len(), "Inserted new word");
        }

        Ok(is_new)
    }

    /// Returns `true` if exactly `word` was inserted.
    pub fn search<W>(&self, word: W) -> TrieStoreResult<bool>
    where
        W: AsRef<str>,
    {
        Ok(self
            .find_node(word.as_ref())?
            .map_or(false, |id| self.nodes[id.index()].is_terminal))
    }

    /// Returns `true` if any inserted word begins with `prefix`.
    ///
    /// A stored word counts as a prefix of itself.
    pub fn starts_with<P>(&self, prefix: P) -> TrieStoreResult<bool>
    where
        P: AsRef<str>,
    {
        Ok(self.find_node(prefix.as_ref())?.is_some())
    }

    /// Returns the accumulated frequency of `word`, or `None` if it is not stored.
    pub fn frequency<W>(&self, word: W) -> TrieStoreResult<Option<u64>>
    where
        W: AsRef<str>,
    {
        Ok(self.find_node(word.as_ref())?.and_then(|id| {
            let node = &self.nodes[id.index()];
            node.is_terminal.then_some(node.frequency)
        }))
    }

    /// Enumerates every stored word starting with `prefix`, in alphabetical order.
    ///
    /// The returned iterator is lazy. If no stored word starts with `prefix`
    /// it yields nothing.
    pub fn words_with_prefix<P>(&self, prefix: P) -> TrieStoreResult<WordsWithPrefix<'_>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let start = self.find_node(prefix)?;
        tracing::debug!(prefix, found = start.is_some(), "Enumerating words by prefix");
        Ok(WordsWithPrefix::new(&self.nodes, prefix, start))
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes in the tree, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Removes all words, leaving only an empty root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::new());
        self.len = 0;
        tracing::debug!("Cleared trie store");
    }

    /// Checks that every symbol of `word` is in `a..=z`.
    pub fn validate_word(word: &str) -> TrieStoreResult<()> {
        Self::symbols(word).map(|_| ())
    }

    /// Walks the path spelled by `word`, returning the node it ends on.
    fn find_node(&self, word: &str) -> TrieStoreResult<Option<NodeId>> {
        let mut current = NodeId::ROOT;
        for index in Self::symbols(word)? {
            match self.nodes[current.index()].child(index) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Validates `word` and maps it to child slot indices.
    fn symbols(word: &str) -> TrieStoreResult<Vec<usize>> {
        word.chars()
            .enumerate()
            .map(|(position, symbol)| {
                symbol_index(symbol).ok_or_else(|| TrieStoreError::InvalidSymbol {
                    word: word.to_string(),
                    symbol,
                    position,
                })
            })
            .collect()
    }
}

impl Default for TrieStore {
    fn default() -> Self {
        Self::new()
    }
}
