// logmask-core/src/engine.rs
//! Defines the core `Redactor` trait.
//!
//! The `Redactor` trait is the seam between the rule storage and the
//! writer: it decouples the redacting writer from the concrete pattern
//! engine, so the engine can be swapped or mocked in tests without
//! touching the write path.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

/// A trait that defines the core functionality of a redaction engine.
///
/// Implementations must be immutable once constructed: a `Redactor` is
/// shared read-only across every writer and every call, potentially from
/// multiple threads at once, which is why the trait requires `Send + Sync`
/// and takes `&self`.
pub trait Redactor: Send + Sync {
    /// Applies every configured rewrite to `input`, in order, and returns
    /// the transformed buffer.
    ///
    /// Returns `Cow::Borrowed` when no rewrite matched, so the common case
    /// of a log line containing nothing sensitive does not allocate.
    fn redact<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]>;
}
