//! Scalar Converter — turns a probed token into one of the four target types.
//!
//! | Target | String | Integer | Float | Boolean | Null |
//! |--------|--------|---------|-------|---------|------|
//! | String | content | literal | literal | literal | `""` |
//! | Int    | parse i64 | as is | truncate | error | `0` |
//! | Float  | parse f64 | widen | as is | error | `0.0` |
//! | Bool   | truthy | `!= 0` | `!= 0.0` | as is | `false` |
//!
//! String targets take the original literal text for non-string tokens, so
//! `-123.456` becomes `"-123.456"` rather than a reformatted float. Truthy
//! strings are every non-empty string except `"false"` and `"0"`, compared
//! case-insensitively after trimming.
//!
//! The [`Scalar`] trait binds each target type to its conversion and
//! formatting rules; the generic wrappers in [`crate::plain`] and
//! [`crate::nullable`] are written once against it.

use crate::error::{FtError, Result};
use crate::probe::{Probe, ProbedKind};
use crate::sanitize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Coerce to a string: verbatim content for strings, literal text otherwise.
pub fn to_string(probe: Probe<'_>) -> String {
    match probe.kind {
        ProbedKind::String(s) => s,
        ProbedKind::Null => String::new(),
        ProbedKind::Integer(_) | ProbedKind::Float(_) | ProbedKind::Boolean(_) => {
            probe.literal.to_string()
        }
    }
}

/// Coerce to a signed 64-bit integer. Floats truncate toward zero.
pub fn to_int(probe: Probe<'_>) -> Result<i64> {
    match probe.kind {
        ProbedKind::String(s) => s.parse::<i64>().map_err(|e| parse_failure(s, "int", e)),
        ProbedKind::Integer(i) => Ok(i),
        // `as` truncates toward zero and saturates at the i64 bounds
        ProbedKind::Float(f) => Ok(f as i64),
        ProbedKind::Boolean(_) => Err(bool_rejected("int")),
        ProbedKind::Null => Ok(0),
    }
}

/// Coerce to a 64-bit float. Integers widen.
pub fn to_float(probe: Probe<'_>) -> Result<f64> {
    match probe.kind {
        ProbedKind::String(s) => match s.parse::<f64>() {
            // overflow parses to infinity; only a spelled-out infinity may
            Ok(f) if f.is_infinite() && !names_infinity(&s) => {
                Err(parse_failure(s, "float", "value out of range"))
            }
            Ok(f) => Ok(f),
            Err(e) => Err(parse_failure(s, "float", e)),
        },
        ProbedKind::Integer(i) => Ok(i as f64),
        ProbedKind::Float(f) => Ok(f),
        ProbedKind::Boolean(_) => Err(bool_rejected("float")),
        ProbedKind::Null => Ok(0.0),
    }
}

/// Coerce to a boolean using truthiness rules. Never fails.
pub fn to_bool(probe: Probe<'_>) -> bool {
    match probe.kind {
        ProbedKind::String(s) => is_truthy(&s),
        ProbedKind::Integer(i) => i != 0,
        ProbedKind::Float(f) => f != 0.0,
        ProbedKind::Boolean(b) => b,
        ProbedKind::Null => false,
    }
}

fn is_truthy(s: &str) -> bool {
    let folded = s.trim().to_lowercase();
    !(folded.is_empty() || folded == "false" || folded == "0")
}

fn names_infinity(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_failure(input: String, target: &'static str, err: impl fmt::Display) -> FtError {
    debug!(input = %input, target, "numeric parse failed");
    FtError::NumericParse {
        input,
        target,
        reason: err.to_string(),
    }
}

fn bool_rejected(target: &'static str) -> FtError {
    debug!(target, "boolean token rejected by numeric target");
    FtError::TypeRejected { target }
}

/// A target type of the lenient codec: `String`, `i64`, `f64` or `bool`.
///
/// Implementations supply the conversion row of the table above, the
/// canonical JSON literal, the map-key text, and a total order so wrappers
/// can be hashed and sorted (floats compare by `f64::total_cmp`).
pub trait Scalar: Clone + Default + fmt::Debug {
    /// Lowercase target name used in error messages.
    const NAME: &'static str;
    /// Name of the nullable wrapper over this type, used in key errors.
    const NULLABLE_NAME: &'static str;
    /// Whether a blank string decodes to null in the nullable family.
    const BLANK_IS_NULL: bool = false;

    fn from_probe(probe: Probe<'_>) -> Result<Self>;

    /// Canonical JSON literal for this value.
    fn to_json(&self) -> Result<String>;

    /// Map-key text. Same as the JSON literal except strings are unquoted.
    fn to_text(&self) -> Result<String> {
        self.to_json()
    }

    fn is_zero(&self) -> bool;

    fn total_cmp(&self, other: &Self) -> Ordering;

    fn hash_scalar<H: Hasher>(&self, state: &mut H);
}

impl Scalar for String {
    const NAME: &'static str = "string";
    const NULLABLE_NAME: &'static str = "NStr";

    fn from_probe(probe: Probe<'_>) -> Result<Self> {
        Ok(to_string(probe))
    }

    fn to_json(&self) -> Result<String> {
        Ok(sanitize::quote(&sanitize::clean(self)))
    }

    fn to_text(&self) -> Result<String> {
        Ok(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn hash_scalar<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl Scalar for i64 {
    const NAME: &'static str = "int";
    const NULLABLE_NAME: &'static str = "NInt";
    const BLANK_IS_NULL: bool = true;

    fn from_probe(probe: Probe<'_>) -> Result<Self> {
        to_int(probe)
    }

    fn to_json(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn hash_scalar<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl Scalar for f64 {
    const NAME: &'static str = "float";
    const NULLABLE_NAME: &'static str = "NFloat";
    const BLANK_IS_NULL: bool = true;

    fn from_probe(probe: Probe<'_>) -> Result<Self> {
        to_float(probe)
    }

    /// Shortest round-trip decimal form, never in exponent notation.
    fn to_json(&self) -> Result<String> {
        if !self.is_finite() {
            return Err(FtError::NonFinite(*self));
        }
        Ok(format!("{}", self))
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn hash_scalar<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl Scalar for bool {
    const NAME: &'static str = "bool";
    const NULLABLE_NAME: &'static str = "NBool";

    fn from_probe(probe: Probe<'_>) -> Result<Self> {
        Ok(to_bool(probe))
    }

    fn to_json(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn hash_scalar<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}
