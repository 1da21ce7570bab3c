//! Trie configuration module.
//!
//! This module defines configuration for the word store and for loading
//! word and word pair lists.

use super::{ConfigResult, Validate};
use crate::data_structures::TrieStoreConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Word store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrieSettings {
    /// Maximum number of symbols in an inserted word (None for unbounded)
    pub max_word_len: Option<usize>,
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_len == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl From<&TrieSettings> for TrieStoreConfig {
    fn from(settings: &TrieSettings) -> Self {
        match settings.max_word_len {
            Some(max_word_len) => TrieStoreConfig::new().with_max_word_len(max_word_len),
            None => TrieStoreConfig::new(),
        }
    }
}

/// Word list loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoadConfig {
    /// Word list loaded at startup (None for no list)
    pub words: Option<PathBuf>,

    /// Word pair list loaded for prediction (None for no list)
    pub bigrams: Option<PathBuf>,

    /// Whether an invalid entry aborts loading instead of being skipped
    pub strict: bool,
}

impl Validate for LoadConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (key, path) in [("load.words", &self.words), ("load.bigrams", &self.bigrams)] {
            if path.as_ref().is_some_and(|path| path.as_os_str().is_empty()) {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must not be an empty path"
                )));
            }
        }
        Ok(())
    }
}
