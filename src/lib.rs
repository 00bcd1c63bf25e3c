/*!
 * # transcheck - Translation quality checks over HTTP
 *
 * A small Rust service that compares a source string with its translation
 * and reports structural problems.
 *
 * ## Features
 *
 * - Placeholder validation: `{name}` style slots must survive translation
 * - Consistency checks: trailing `?`, `!`, `.` and a sane length ratio
 * - Random number endpoint (1 to 99)
 * - JSON over HTTP with permissive CORS
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management (JSON file, `PORT` env)
 * - `validation`: Pure validation logic:
 *   - `validation::placeholders`: Placeholder set comparison
 *   - `validation::consistency`: Punctuation and length checks
 *   - `validation::service`: Configured validators for the server
 * - `random`: Random number utility
 * - `server`: axum router, handlers and bind/serve lifecycle
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod validation;
pub mod random;
pub mod server;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use validation::{validate_placeholders, validate_consistency, ValidationService};
pub use server::{build_router, AppState, Server};
pub use errors::{ApiError, AppError};
