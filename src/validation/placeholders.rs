/*!
 * Placeholder validation for translated strings.
 *
 * Template slots such as `{name}`, `{0}` or `{}` must survive translation
 * verbatim. This module extracts them from the source and translated text
 * and reports which ones went missing and which ones appeared.
 *
 * Comparison uses set semantics: a placeholder repeated three times in the
 * source and once in the translation counts as matched. Callers that care
 * about multiplicity need to count occurrences themselves.
 */

use std::collections::BTreeSet;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex for matching placeholders (shortest content between braces)
static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{.*?\}").expect("Invalid placeholder regex")
});

/// Placeholder validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderResult {
    /// Whether both texts carry the same placeholder set
    pub is_valid: bool,
    /// Placeholders in the source but not in the translation
    pub missing: BTreeSet<String>,
    /// Placeholders in the translation but not in the source
    pub added: BTreeSet<String>,
    /// Distinct placeholders found in the source, sorted
    pub source_set: BTreeSet<String>,
    /// Distinct placeholders found in the translation, sorted
    pub translated_set: BTreeSet<String>,
}

impl PlaceholderResult {
    /// Build a result from the two extracted sets
    pub fn from_sets(source_set: BTreeSet<String>, translated_set: BTreeSet<String>) -> Self {
        let missing: BTreeSet<String> = source_set
            .difference(&translated_set)
            .cloned()
            .collect();
        let added: BTreeSet<String> = translated_set
            .difference(&source_set)
            .cloned()
            .collect();

        Self {
            is_valid: missing.is_empty() && added.is_empty(),
            missing,
            added,
            source_set,
            translated_set,
        }
    }

    /// Placeholders present on both sides
    pub fn matched(&self) -> BTreeSet<String> {
        self.source_set
            .intersection(&self.translated_set)
            .cloned()
            .collect()
    }
}

/// Placeholder validator for source/translation pairs
pub struct PlaceholderValidator;

impl PlaceholderValidator {
    /// Extract the distinct placeholders of a text
    ///
    /// Matches are taken left to right without overlap, so `{a{b}` yields
    /// `{a{b}` and `{{x}}` yields `{{x}`.
    pub fn extract(text: &str) -> BTreeSet<String> {
        PLACEHOLDER_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Compare the placeholders of a source text and its translation
    ///
    /// # Arguments
    /// * `source` - The original text
    /// * `translated` - The translated text
    ///
    /// # Returns
    /// * `PlaceholderResult` with the set differences
    pub fn validate(source: &str, translated: &str) -> PlaceholderResult {
        let result = PlaceholderResult::from_sets(Self::extract(source), Self::extract(translated));

        debug!(
            "Placeholder validation: source={}, translated={}, missing={}, added={}",
            result.source_set.len(),
            result.translated_set.len(),
            result.missing.len(),
            result.added.len()
        );

        result
    }
}

/// Compare placeholders between a source text and its translation
///
/// Repeated placeholders count once on each side.
pub fn validate_placeholders(source: &str, translated: &str) -> PlaceholderResult {
    PlaceholderValidator::validate(source, translated)
}
