// logmask-core/src/writer.rs
//! The redacting writer.
//!
//! `RedactingWriter` wraps an underlying byte sink and applies a redaction
//! chain to every buffer before forwarding it, so sensitive fields never
//! reach persistent or remote log storage. It implements `std::io::Write`
//! and can therefore be inserted between any structured-log encoder and
//! its output stream without changing logging call sites.
//!
//! License: MIT OR APACHE 2.0

use std::io::{self, Write};

use crate::engine::Redactor;
use crate::errors::RedactError;
use crate::rules::RuleChain;

/// A writer-shaped wrapper that applies a [`Redactor`] to every buffer
/// before forwarding it to the underlying sink.
///
/// The writer is stateless per write: no buffering across calls, no
/// mutable state beyond the sink itself. Concurrent writers sharing one
/// (cloned) rule chain are safe; serializing physical writes on a shared
/// sink remains the sink's own contract.
#[derive(Debug)]
pub struct RedactingWriter<W: Write, R: Redactor = RuleChain> {
    sink: W,
    rules: R,
}

impl<W: Write> RedactingWriter<W, RuleChain> {
    /// Wraps `sink` with `rules`.
    ///
    /// An empty chain falls back to [`RuleChain::default_rules`]: a writer
    /// is never left with zero redaction rules by omission. The fallback
    /// compiles the default set, so this propagates a
    /// [`RedactError::RuleCompilation`] on a defective build.
    pub fn new(sink: W, rules: RuleChain) -> Result<Self, RedactError> {
        let rules = if rules.is_empty() {
            RuleChain::default_rules()?
        } else {
            rules
        };

        Ok(Self { sink, rules })
    }

    /// Wraps `sink` with the built-in default chain.
    pub fn with_default_rules(sink: W) -> Result<Self, RedactError> {
        Ok(Self {
            sink,
            rules: RuleChain::default_rules()?,
        })
    }
}

impl<W: Write, R: Redactor> RedactingWriter<W, R> {
    /// Wraps `sink` with an explicit redactor, with no empty-chain
    /// fallback: the writer keeps exactly the redactor it is given.
    pub fn with_redactor(sink: W, rules: R) -> Self {
        Self { sink, rules }
    }

    /// The redactor applied to every write.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Gets a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Gets a mutable reference to the underlying sink.
    ///
    /// Writing directly to the sink bypasses redaction.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Unwraps the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write, R: Redactor> Write for RedactingWriter<W, R> {
    /// Redacts `buf` and writes the whole transformed buffer to the sink.
    ///
    /// Redaction can change the buffer length, so the transformed buffer is
    /// written in full (`write_all`) and the *pre-transform* length
    /// `buf.len()` is reported on success, keeping the `io::Write` contract
    /// that the return value counts consumed input bytes. Sink errors pass
    /// through verbatim; there is no retry or buffering on this path.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let data = self.rules.redact(buf);
        self.sink.write_all(&data)?;

        Ok(buf.len())
    }

    /// Passthrough to the sink's flush; nothing is buffered here.
    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    /// A sink that fails every operation, for error-passthrough tests.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is gone"))
        }
    }

    /// A sink that records whether it was flushed.
    #[derive(Default)]
    struct FlushSink {
        flushed: bool,
    }

    impl Write for FlushSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    struct Uppercase;

    impl Redactor for Uppercase {
        fn redact<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
            Cow::Owned(input.to_ascii_uppercase())
        }
    }

    #[test]
    fn write_reports_pre_transform_length() {
        let chain = RuleChain::default_rules().unwrap();
        let mut writer = RedactingWriter::new(Vec::new(), chain).unwrap();

        let input = b"login password:hunter2 done";
        let n = writer.write(input).unwrap();

        assert_eq!(n, input.len());
        assert_eq!(writer.get_ref().as_slice(), b"login password:* done");
    }

    #[test]
    fn empty_chain_falls_back_to_defaults() {
        let mut writer = RedactingWriter::new(Vec::new(), RuleChain::new(Vec::new())).unwrap();
        assert_eq!(writer.rules().len(), 5);

        writer.write_all(b"password:1234").unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"password:*");
    }

    #[test]
    fn explicit_redactor_is_kept_as_given() {
        let mut writer = RedactingWriter::with_redactor(Vec::new(), Uppercase);
        writer.write_all(b"quiet").unwrap();
        assert_eq!(writer.into_inner(), b"QUIET");
    }

    #[test]
    fn sink_write_error_passes_through() {
        let chain = RuleChain::default_rules().unwrap();
        let mut writer = RedactingWriter::new(BrokenSink, chain).unwrap();

        let err = writer.write(b"password:1234").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn flush_passes_through_to_sink() {
        let chain = RuleChain::default_rules().unwrap();
        let mut writer = RedactingWriter::new(FlushSink::default(), chain).unwrap();

        writer.flush().unwrap();
        assert!(writer.get_ref().flushed);

        let mut broken = RedactingWriter::new(BrokenSink, RuleChain::default_rules().unwrap())
            .unwrap();
        assert_eq!(broken.flush().unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
