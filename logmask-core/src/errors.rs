//! errors.rs - Custom error types for the logmask-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `logmask-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RedactError {
    /// A redaction pattern failed to compile. Fatal when raised for the
    /// built-in default set: an uncompilable redaction rule means unredacted
    /// secrets would flow to logs.
    #[error("Failed to compile redaction pattern '{0}': {1}")]
    RuleCompilation(String, regex::Error),

    #[error("An I/O error occurred on the log sink: {0}")]
    Io(#[from] std::io::Error),
}
