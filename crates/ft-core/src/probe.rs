//! Kind Prober — classifies one raw JSON scalar token.
//!
//! A token is tried against each scalar shape in a fixed priority order and
//! the first attempt that parses wins:
//!
//! 1. `null`
//! 2. JSON string (unescaped content is captured)
//! 3. 64-bit signed integer (no fraction, no exponent)
//! 4. 64-bit float
//! 5. `true` / `false`
//!
//! Integer is tried before Float so that `123` is never classified as a float,
//! while `123.0`, `1e3` and integers outside the `i64` range fall through to
//! Float. The original literal text is kept alongside the decoded kind because
//! String targets reproduce it verbatim.

use crate::error::{FtError, Result};
use serde_json::Value;
use tracing::trace;

/// The scalar shape of a probed token, carrying its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbedKind {
    Null,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl ProbedKind {
    /// Short lowercase name of the kind, used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            ProbedKind::Null => "null",
            ProbedKind::String(_) => "string",
            ProbedKind::Integer(_) => "integer",
            ProbedKind::Float(_) => "float",
            ProbedKind::Boolean(_) => "boolean",
        }
    }
}

/// A probed token: its kind plus the original literal it was decoded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe<'a> {
    pub kind: ProbedKind,
    /// The token text with surrounding JSON whitespace removed.
    pub literal: &'a str,
}

/// Classify a raw JSON token.
///
/// Returns [`FtError::MalformedToken`] if the token is not valid JSON and
/// [`FtError::NotScalar`] if it is an array or object.
pub fn probe(raw: &str) -> Result<Probe<'_>> {
    let literal = raw.trim_matches(is_json_whitespace);
    let kind = try_null(literal)
        .or_else(|| try_string(literal))
        .or_else(|| try_integer(literal))
        .or_else(|| try_float(literal))
        .or_else(|| try_boolean(literal));

    match kind {
        Some(kind) => {
            trace!(kind = kind.name(), literal, "probed scalar token");
            Ok(Probe { kind, literal })
        }
        None => Err(rejection(literal)),
    }
}

fn try_null(literal: &str) -> Option<ProbedKind> {
    (literal == "null").then_some(ProbedKind::Null)
}

fn try_string(literal: &str) -> Option<ProbedKind> {
    if !literal.starts_with('"') {
        return None;
    }
    serde_json::from_str::<String>(literal)
        .ok()
        .map(ProbedKind::String)
}

fn try_integer(literal: &str) -> Option<ProbedKind> {
    serde_json::from_str::<i64>(literal)
        .ok()
        .map(ProbedKind::Integer)
}

fn try_float(literal: &str) -> Option<ProbedKind> {
    serde_json::from_str::<f64>(literal)
        .ok()
        .map(ProbedKind::Float)
}

fn try_boolean(literal: &str) -> Option<ProbedKind> {
    serde_json::from_str::<bool>(literal)
        .ok()
        .map(ProbedKind::Boolean)
}

/// Build the error for a token no attempt accepted: either the document
/// parser's own error, or the structural kind that was found instead.
fn rejection(literal: &str) -> FtError {
    match serde_json::from_str::<Value>(literal) {
        Ok(value) => FtError::NotScalar {
            found: value_type_name(&value),
        },
        Err(err) => FtError::MalformedToken(err),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
