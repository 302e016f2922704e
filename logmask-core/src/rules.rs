// logmask-core/src/rules.rs
//! Rule compilation and the ordered redaction chain.
//!
//! A `Rule` is a single compiled pattern plus a replacement template. A
//! `RuleChain` is an ordered sequence of rules applied sequentially to a
//! byte buffer, each rule's output feeding the next. Chains are built once
//! at startup, either from the built-in default set or from operator
//! specification strings, and are never mutated afterwards.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use log::warn;
use regex::bytes::Regex;

use crate::engine::Redactor;
use crate::errors::RedactError;

/// The delimiter splitting an operator specification string into its
/// pattern and replacement halves.
///
/// This is a reserved sequence: there is no escaping mechanism for a
/// literal `==>` inside the pattern or the replacement.
pub const SPEC_DELIMITER: &str = "==>";

/// A single compiled redaction rule.
///
/// Holds a compiled regular expression along with its replacement
/// template, ready for efficient application to log buffers. Immutable
/// once built; the compiled pattern is safe for concurrent matching.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: Vec<u8>,
}

impl Rule {
    /// Compiles `pattern` and pairs it with `replacement`.
    ///
    /// The replacement is stored verbatim as a template; capture-group
    /// references (`$1`, `${name}`) are expanded at apply time. A reference
    /// to a group the pattern does not define expands to the empty string,
    /// never an error. A pattern that fails to compile is propagated as
    /// [`RedactError::RuleCompilation`] carrying the offending pattern.
    pub fn compile(pattern: &str, replacement: &str) -> Result<Self, RedactError> {
        let regex = Regex::new(pattern)
            .map_err(|e| RedactError::RuleCompilation(pattern.to_string(), e))?;

        Ok(Self {
            regex,
            replacement: replacement.as_bytes().to_vec(),
        })
    }

    /// Replaces all non-overlapping, leftmost-first matches of the pattern
    /// in `input` with the replacement template.
    ///
    /// Scanning proceeds left to right and resumes immediately after each
    /// consumed match; already-replaced text is never re-matched within one
    /// call. Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        self.regex.replace_all(input, self.replacement.as_slice())
    }

    /// Returns true if the pattern matches anywhere in `input`.
    pub fn is_match(&self, input: &[u8]) -> bool {
        self.regex.is_match(input)
    }

    /// The source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// An ordered, immutable sequence of redaction rules.
///
/// Order is significant and caller-controlled: later rules see the output
/// of earlier rules, not the original buffer. There is no deduplication
/// and no reordering. Cloning is cheap enough to share one chain across
/// every writer in the process (compiled patterns share their internals).
#[derive(Debug, Clone, Default)]
pub struct RuleChain {
    rules: Vec<Rule>,
}

impl RuleChain {
    /// Builds a chain from already-compiled rules, preserving their order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Builds the built-in default chain: five rules masking a `password`
    /// field across the textual shapes that can co-occur in one log line.
    ///
    /// The order is fixed. The `&`-terminated query-string rule must run
    /// before the end-of-value one, so the more specific boundary wins and
    /// the catch-all cannot swallow past a following parameter.
    ///
    /// A compile failure here indicates a defect in the shipped rule set
    /// and is propagated so initialization aborts rather than letting
    /// unredacted secrets through.
    pub fn default_rules() -> Result<Self, RedactError> {
        let rules = vec![
            // JSON-quoted field: "password": "secret"
            Rule::compile(r#""password":(\s*)".*?""#, r#""password":${1}"*""#)?,
            // Bare key:value field: password: secret
            Rule::compile(r"password:(\s*).*?\S*", "password:${1}*")?,
            // Backslash-escaped JSON inside a quoted payload: \"password\": \"secret\"
            Rule::compile(r#"\\"password\\":(\s*)\\".*?\\""#, r#"\"password\":${1}\"*\""#)?,
            // Query string, bounded by a following parameter: password=secret&
            Rule::compile(r"password=\w*&", "password=*&")?,
            // Query string, end of value: password=secret
            Rule::compile(r"password=\w*\S", "password=*")?,
        ];

        Ok(Self { rules })
    }

    /// Builds a chain from operator specification strings, preserving
    /// insertion order.
    ///
    /// Each spec must contain exactly one [`SPEC_DELIMITER`] splitting it
    /// into `pattern` and `replacement`. Malformed specs and specs whose
    /// pattern fails to compile are skipped with a warning naming the
    /// offending spec; they never abort chain construction, because
    /// logging availability takes priority over completeness of
    /// operator-supplied redaction coverage. The skipped rule's secret
    /// shape remains unredacted.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Self {
        let mut rules = Vec::with_capacity(specs.len());

        for spec in specs {
            let spec = spec.as_ref();
            let parts: Vec<&str> = spec.split(SPEC_DELIMITER).collect();
            if parts.len() != 2 {
                warn!(
                    "Skipping malformed redaction spec '{}': expected exactly one '{}'.",
                    spec, SPEC_DELIMITER
                );
                continue;
            }

            match Rule::compile(parts[0], parts[1]) {
                Ok(rule) => rules.push(rule),
                Err(e) => warn!("Skipping redaction spec '{}': {}", spec, e),
            }
        }

        Self { rules }
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Redactor for RuleChain {
    fn redact<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        let mut data: Cow<'a, [u8]> = Cow::Borrowed(input);

        for rule in &self.rules {
            // Probe first so a buffer with nothing sensitive in it stays
            // borrowed through the whole chain.
            if rule.is_match(&data) {
                let next = rule.apply(&data).into_owned();
                data = Cow::Owned(next);
            }
        }

        data
    }
}
