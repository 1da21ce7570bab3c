//! Data structures for the Lau trie.
//!
//! This module contains the word store, the bigram model built on top of
//! it, and the types they expose.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit error types for every fallible operation
//! - Deterministic, ordered output

pub mod bigram;
pub mod trie_store;

// Re-export common data structures
pub use bigram::BigramModel;
pub use trie_store::{
    SuggestOptions, TrieStore, TrieStoreConfig, TrieStoreError, TrieStoreResult, WordsWithPrefix,
};
