// logmask/src/logger.rs
//! Pipeline assembly.
//!
//! Builds the process logger: an `env_logger` backend whose formatted
//! records are piped through a `RedactingWriter`, so every record is
//! scrubbed before it reaches stdout or stderr. Operator `filter_specs`
//! replace the built-in default chain; an empty (or fully skipped) spec
//! list falls back to the defaults.
//!
//! License: MIT OR APACHE 2.0

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde_json::json;

use logmask_core::{RedactingWriter, RuleChain};

use crate::config::{level_filter, Encoding, LoggerConfig};

/// Initializes the global logger from `config`.
///
/// Fails if the built-in default chain does not compile (a defect in the
/// shipped rule set) or if a global logger is already installed.
pub fn init(config: &LoggerConfig) -> Result<()> {
    let level = level_filter(&config.level);
    let chain = RuleChain::from_specs(&config.filter_specs);

    let sink: Box<dyn Write + Send> = if routes_to_stdout(level) {
        Box::new(io::stdout())
    } else {
        Box::new(io::stderr())
    };
    let writer = RedactingWriter::new(sink, chain)
        .context("Failed to build the redaction chain for the log pipeline")?;

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Pipe(Box::new(writer)));

    match config.encoding {
        Encoding::Console => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}\t{}\t{}\t{}",
                    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    record.level(),
                    record.target(),
                    record.args()
                )
            });
        }
        Encoding::Json => {
            builder.format(|buf, record| {
                let line = json!({
                    "time": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    "level": record.level().to_string(),
                    "logger": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
    }

    builder
        .try_init()
        .context("Failed to install the global logger")?;

    Ok(())
}

/// Routing rule carried over from the reference pipeline: debug, info and
/// warn configurations log to stdout; quieter configurations (error, off)
/// log to stderr.
fn routes_to_stdout(level: LevelFilter) -> bool {
    level >= LevelFilter::Warn
}
