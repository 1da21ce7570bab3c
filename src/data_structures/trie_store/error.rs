// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the trie store.
//!
//! This module defines the error types that can occur during trie store operations.

/// Errors that can occur in trie store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieStoreError {
    /// A character outside `a..=z` was found in a word or prefix.
    #[error("Invalid symbol '{symbol}' at position {position} in '{word}'")]
    InvalidSymbol {
        /// The word or prefix that was rejected.
        word: String,
        /// The offending character.
        symbol: char,
        /// Character position of the offending symbol.
        position: usize,
    },

    /// A word exceeds the configured maximum length.
    #[error("Word of length {len} exceeds maximum word length of {max_len}")]
    WordTooLong {
        /// Length of the rejected word in symbols.
        len: usize,
        /// The configured maximum.
        max_len: usize,
    },
}

impl TrieStoreError {
    /// Returns `true` if this is an [`TrieStoreError::InvalidSymbol`] error.
    pub fn is_invalid_symbol(&self) -> bool {
        matches!(self, Self::InvalidSymbol { .. })
    }
}
