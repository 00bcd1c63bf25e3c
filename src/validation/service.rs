/*!
 * Validation service that owns the configured validators.
 *
 * The HTTP layer holds one instance behind an `Arc` and calls through it,
 * so thresholds are resolved once at startup.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use super::consistency::{
    ConsistencyChecker, ConsistencyCheckerConfig, ConsistencyResult, DEFAULT_MAX_LENGTH_RATIO,
    DEFAULT_MIN_LENGTH_RATIO,
};
use super::placeholders::{PlaceholderResult, PlaceholderValidator};

/// Configuration for the validation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum acceptable length ratio
    #[serde(default = "default_min_ratio")]
    pub min_length_ratio: f64,

    /// Maximum acceptable length ratio
    #[serde(default = "default_max_ratio")]
    pub max_length_ratio: f64,
}

fn default_min_ratio() -> f64 {
    DEFAULT_MIN_LENGTH_RATIO
}

fn default_max_ratio() -> f64 {
    DEFAULT_MAX_LENGTH_RATIO
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length_ratio: default_min_ratio(),
            max_length_ratio: default_max_ratio(),
        }
    }
}

impl From<&ValidationConfig> for ConsistencyCheckerConfig {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            min_ratio: config.min_length_ratio,
            max_ratio: config.max_length_ratio,
            ..Self::default()
        }
    }
}

/// Unified entry point for the translation checks
pub struct ValidationService {
    consistency: ConsistencyChecker,
}

impl ValidationService {
    /// Create a service with default thresholds
    pub fn new() -> Self {
        Self::with_config(&ValidationConfig::default())
    }

    /// Create a service with custom thresholds
    pub fn with_config(config: &ValidationConfig) -> Self {
        Self {
            consistency: ConsistencyChecker::with_config(config.into()),
        }
    }

    /// Compare placeholder sets of a source/translation pair
    pub fn validate_placeholders(&self, source: &str, translated: &str) -> PlaceholderResult {
        PlaceholderValidator::validate(source, translated)
    }

    /// Compare trailing punctuation and length of a source/translation pair
    pub fn validate_consistency(&self, source: &str, translated: &str) -> ConsistencyResult {
        let result = self.consistency.check(source, translated);
        if !result.is_consistent {
            debug!("Consistency warnings: {:?}", result.warnings);
        }
        result
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}
