//! Suggestion and prediction configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::bigram::DEFAULT_TOP_K;
use crate::data_structures::SuggestOptions;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Maximum number of suggestions returned
    pub max_suggestions: usize,

    /// Maximum number of candidates enumerated per prefix before ranking
    pub scan_limit: usize,

    /// Whether autocomplete retries with prefixes at edit distance one
    pub fuzzy: bool,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        let options = SuggestOptions::default();
        Self {
            max_suggestions: options.limit,
            scan_limit: options.scan_limit,
            fuzzy: options.fuzzy,
        }
    }
}

impl Validate for SuggestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_suggestions == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggest.max_suggestions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.scan_limit < self.max_suggestions {
            return Err(ConfigError::ValueOutOfRange {
                key: "suggest.scan_limit".to_string(),
                message: format!(
                    "must be at least max_suggestions ({})",
                    self.max_suggestions
                ),
            });
        }

        Ok(())
    }
}

impl From<&SuggestConfig> for SuggestOptions {
    fn from(config: &SuggestConfig) -> Self {
        SuggestOptions::default()
            .with_limit(config.max_suggestions)
            .with_scan_limit(config.scan_limit)
            .with_fuzzy(config.fuzzy)
    }
}

/// Next-word prediction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictConfig {
    /// Maximum number of predictions returned
    pub top_k: usize,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Validate for PredictConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.top_k == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "predict.top_k".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
