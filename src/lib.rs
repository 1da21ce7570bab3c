//! Lau Trie Library
//!
//! This library contains a prefix tree over lowercase words together with
//! the pieces needed to use it from an application: word-list loading,
//! ranked suggestions, configuration, and error reporting.
//!
//! # Architecture
//!
//! - [`data_structures::TrieStore`] owns an arena of nodes and answers
//!   exact lookups, prefix checks, and ordered prefix enumeration
//! - [`data_structures::BigramModel`] predicts the next word from pair counts
//! - [`loader`] fills a store from `word [frequency]` lists and a model from
//!   `prev next [count]` lists
//! - [`config`] layers defaults, a config file, and environment overrides
//! - [`error`] aggregates every module error into [`error::LauError`]

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lau trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
