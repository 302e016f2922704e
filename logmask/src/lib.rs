// logmask/src/lib.rs
//! # Logmask
//!
//! Logging front-end over `logmask-core`: a configuration object plus the
//! pipeline assembly that routes `log` records through a redacting writer
//! before they reach stdout or stderr.
//!
//! Call sites use the `log` crate macros as usual; redaction happens
//! transparently below the encoder:
//!
//! ```rust,no_run
//! use logmask::{init, LoggerConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init(&LoggerConfig::default())?;
//!     // The password value is masked before the record hits the sink.
//!     log::info!("login attempt password:hunter2");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod logger;

pub use config::{level_filter, Encoding, LoggerConfig};
pub use logger::init;

// Re-export the core types consumers need to build custom pipelines.
pub use logmask_core::{RedactingWriter, Redactor, RuleChain, SPEC_DELIMITER};
