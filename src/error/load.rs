//! Word-list loading error module.
//!
//! This module defines error types that may occur while reading word lists
//! into a trie store.

use crate::data_structures::TrieStoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a word list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Error when the word list file is missing.
    #[error("Word list not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when reading from the word list fails.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// Error when a line holds a word the store rejects (strict mode only).
    #[error("Invalid entry on line {line}: {source}")]
    InvalidEntry {
        /// One-based line number
        line: usize,
        /// Why the store rejected the word
        #[source]
        source: TrieStoreError,
    },
}
