// logmask-core/src/lib.rs
//! # Logmask Core Library
//!
//! `logmask-core` provides the rule-chain redaction engine that sits
//! transparently between a structured-logging encoder and its output
//! stream, so sensitive fields (passwords, in the default rule set) never
//! reach persistent or remote log storage.
//!
//! The library is deliberately small and stateless: rules and chains are
//! compiled once at startup, are immutable afterwards, and are safe to
//! share across every writer and thread for the life of the process. The
//! writer itself is a blocking, in-line transform invoked synchronously on
//! whatever thread the logging call originates from.
//!
//! ## Modules
//!
//! * `rules`: Defines `Rule` and `RuleChain`, the built-in default rule
//!   set, and chain construction from operator specification strings.
//! * `writer`: Implements `RedactingWriter`, the `std::io::Write` wrapper
//!   that applies a chain to every buffer before forwarding it.
//! * `engine`: Defines the `Redactor` trait, the seam between rule storage
//!   and the write path.
//! * `errors`: The `RedactError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use std::io::Write;
//! use logmask_core::{RedactingWriter, RuleChain};
//!
//! fn main() -> Result<(), logmask_core::RedactError> {
//!     // 1. Build the built-in default chain (masks `password` fields).
//!     let chain = RuleChain::default_rules()?;
//!
//!     // 2. Wrap any byte sink; here an in-memory buffer stands in for
//!     //    the real log file or stream.
//!     let mut writer = RedactingWriter::new(Vec::new(), chain)?;
//!
//!     // 3. Every write is scrubbed before it reaches the sink.
//!     writer.write_all(b"login ok password:hunter2 uid=42")?;
//!     assert_eq!(writer.get_ref().as_slice(), b"login ok password:* uid=42");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Compile failures in the built-in default set are propagated out of
//! construction and should abort initialization: a silently-dropped
//! redaction rule is a security regression. Operator-supplied
//! specification strings are the opposite: malformed or uncompilable specs
//! are skipped with a `log::warn!` diagnostic so logging availability is
//! never sacrificed to operator misconfiguration. Sink write/flush errors
//! pass through verbatim with no retry or buffering.
//!
//! ## Design Principles
//!
//! * **Immutable after construction:** no rule is ever recompiled or
//!   reordered post-construction, which is what makes lock-free concurrent
//!   writes safe.
//! * **Order matters:** later rules see the output of earlier rules; the
//!   chain is a total order fixed at construction.
//! * **Best effort, not a boundary:** this is a textual scrub over the
//!   configured patterns, not access control.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod engine;
pub mod errors;
pub mod rules;
pub mod writer;

/// Re-exports the redaction engine seam.
pub use engine::Redactor;

/// Re-exports the custom error type for clear error reporting.
pub use errors::RedactError;

/// Re-exports the rule types and the specification delimiter.
pub use rules::{Rule, RuleChain, SPEC_DELIMITER};

/// Re-exports the redacting writer.
pub use writer::RedactingWriter;
