/*!
 * Punctuation and length consistency checks for translated strings.
 *
 * This module compares a source text and its translation after trimming:
 * - Trailing sentence punctuation (`?`, `!`, `.`) must be carried over
 * - The length ratio (translated / source) must stay within bounds
 *
 * The punctuation heuristic only looks at the final character. Languages that
 * also mark questions or exclamations at the start of a sentence (`¿`, `¡`)
 * are not inspected for that leading mark.
 */

use log::debug;
use serde::{Deserialize, Serialize};

/// Default minimum length ratio (translation / source)
pub const DEFAULT_MIN_LENGTH_RATIO: f64 = 0.2;

/// Default maximum length ratio (translation / source)
pub const DEFAULT_MAX_LENGTH_RATIO: f64 = 3.0;

/// Trailing marks checked by default, in warning order
pub const DEFAULT_PUNCTUATION_MARKS: [char; 3] = ['?', '!', '.'];

/// A single mismatch between source and translation
#[derive(Debug, Clone, PartialEq)]
pub enum ConsistencyWarning {
    /// Source ends with a mark the translation does not end with
    PunctuationMismatch { mark: char },
    /// Translation is too long relative to source
    TooLong { ratio: f64 },
    /// Translation is too short relative to source
    TooShort { ratio: f64 },
}

impl std::fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsistencyWarning::PunctuationMismatch { mark } => {
                write!(
                    f,
                    "Punctuation mismatch: source ends with '{}' but translated text does not",
                    mark
                )
            }
            ConsistencyWarning::TooLong { ratio } => {
                write!(
                    f,
                    "Length warning: translated text too long (ratio {:.1})",
                    round_to(*ratio, 1)
                )
            }
            ConsistencyWarning::TooShort { ratio } => {
                write!(
                    f,
                    "Length warning: translated text too short (ratio {:.1})",
                    round_to(*ratio, 1)
                )
            }
        }
    }
}

/// Result of a consistency check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// Whether no warnings were raised
    pub is_consistent: bool,
    /// Human-readable warnings, punctuation first then length
    pub warnings: Vec<String>,
    /// Character count of the trimmed source
    pub source_length: usize,
    /// Character count of the trimmed translation
    pub translated_length: usize,
    /// Length ratio rounded to two decimals, 0 for an empty source
    pub ratio: f64,
}

impl ConsistencyResult {
    fn new(
        warnings: &[ConsistencyWarning],
        source_length: usize,
        translated_length: usize,
        ratio: f64,
    ) -> Self {
        Self {
            is_consistent: warnings.is_empty(),
            warnings: warnings.iter().map(|w| w.to_string()).collect(),
            source_length,
            translated_length,
            ratio: round_to(ratio, 2),
        }
    }
}

/// Configuration for consistency checks
#[derive(Debug, Clone)]
pub struct ConsistencyCheckerConfig {
    /// Minimum acceptable length ratio (translated / source)
    pub min_ratio: f64,
    /// Maximum acceptable length ratio (translated / source)
    pub max_ratio: f64,
    /// Trailing marks to compare, in warning order
    pub punctuation_marks: Vec<char>,
}

impl Default for ConsistencyCheckerConfig {
    fn default() -> Self {
        Self {
            min_ratio: DEFAULT_MIN_LENGTH_RATIO,
            max_ratio: DEFAULT_MAX_LENGTH_RATIO,
            punctuation_marks: DEFAULT_PUNCTUATION_MARKS.to_vec(),
        }
    }
}

/// Consistency checker for source/translation pairs
pub struct ConsistencyChecker {
    config: ConsistencyCheckerConfig,
}

impl ConsistencyChecker {
    /// Create a new checker with default configuration
    pub fn new() -> Self {
        Self {
            config: ConsistencyCheckerConfig::default(),
        }
    }

    /// Create a new checker with custom configuration
    pub fn with_config(config: ConsistencyCheckerConfig) -> Self {
        Self { config }
    }

    /// Length ratio between translated and source text, 0 for an empty source
    pub fn calculate_ratio(source_len: usize, translated_len: usize) -> f64 {
        if source_len == 0 {
            0.0
        } else {
            translated_len as f64 / source_len as f64
        }
    }

    /// Collect the typed warnings for a pair
    pub fn warnings(&self, source_text: &str, translated_text: &str) -> Vec<ConsistencyWarning> {
        let source = source_text.trim();
        let translated = translated_text.trim();
        let mut warnings = Vec::new();

        for &mark in &self.config.punctuation_marks {
            if source.ends_with(mark) && !translated.ends_with(mark) {
                warnings.push(ConsistencyWarning::PunctuationMismatch { mark });
            }
        }

        let source_len = source.chars().count();
        if source_len > 0 {
            // Thresholds compare against the unrounded ratio
            let ratio = Self::calculate_ratio(source_len, translated.chars().count());
            if ratio > self.config.max_ratio {
                warnings.push(ConsistencyWarning::TooLong { ratio });
            } else if ratio < self.config.min_ratio {
                warnings.push(ConsistencyWarning::TooShort { ratio });
            }
        }

        warnings
    }

    /// Check a translation against its source
    pub fn check(&self, source_text: &str, translated_text: &str) -> ConsistencyResult {
        let source_len = source_text.trim().chars().count();
        let translated_len = translated_text.trim().chars().count();
        let ratio = Self::calculate_ratio(source_len, translated_len);

        let warnings = self.warnings(source_text, translated_text);

        debug!(
            "Consistency check: {} -> {} chars, ratio {:.2}, {} warnings",
            source_len,
            translated_len,
            ratio,
            warnings.len()
        );

        ConsistencyResult::new(&warnings, source_len, translated_len, ratio)
    }
}

impl Default for ConsistencyChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check trailing punctuation and length ratio with default thresholds
pub fn validate_consistency(source: &str, translated: &str) -> ConsistencyResult {
    ConsistencyChecker::new().check(source, translated)
}

/// Round half away from zero, used for both the reported ratio and warning text
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
