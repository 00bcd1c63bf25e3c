/*!
 * Validation module for translation quality checks.
 *
 * Every check compares a source text with its translation and is a pure
 * function of the two strings:
 * - Placeholder validation (`{name}` slots preserved verbatim)
 * - Consistency checks (trailing punctuation, length ratio)
 *
 * # Architecture
 *
 * - `placeholders`: Extracts and compares placeholder sets
 * - `consistency`: Compares trailing punctuation and length ratio
 * - `service`: Holds configured validators for the HTTP layer
 */

pub mod placeholders;
pub mod consistency;
pub mod service;

// Re-export main types
pub use service::{ValidationService, ValidationConfig};
pub use placeholders::{PlaceholderResult, PlaceholderValidator, validate_placeholders};
pub use consistency::{ConsistencyChecker, ConsistencyResult, ConsistencyWarning, validate_consistency};
