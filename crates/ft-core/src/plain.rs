//! Plain wrappers — always-present scalars.
//!
//! A `Plain<T>` has no validity flag: `null` and missing fields decode to the
//! zero value of `T`, everything else goes through the probe and converter.

use crate::convert::Scalar;
use crate::error::Result;
use crate::probe::{probe, Probe, ProbedKind};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lenient scalar that is always considered present.
#[derive(Debug, Clone, Default)]
pub struct Plain<T> {
    value: T,
}

/// Any JSON scalar decoded to a string.
pub type Str = Plain<String>;
/// Any JSON scalar decoded to an `i64`. Booleans are rejected.
pub type Int = Plain<i64>;
/// Any JSON scalar decoded to an `f64`. Booleans are rejected.
pub type Float = Plain<f64>;
/// Any JSON scalar decoded to a `bool` by truthiness.
pub type Bool = Plain<bool>;

impl<T: Scalar> Plain<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// True for `""`, `0`, `0.0` and `false`.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Decode one raw JSON scalar token.
    pub fn from_json(raw: &str) -> Result<Self> {
        let probe = probe(raw)?;
        T::from_probe(probe).map(Self::new)
    }

    /// Encode as a canonical JSON literal.
    pub fn to_json(&self) -> Result<String> {
        self.value.to_json()
    }

    /// Decode map-key text, treating it as string content.
    pub fn from_text(text: &str) -> Result<Self> {
        let probe = Probe {
            kind: ProbedKind::String(text.to_string()),
            literal: text,
        };
        T::from_probe(probe).map(Self::new)
    }

    /// Map-key text: the JSON literal, unquoted for strings.
    pub fn to_text(&self) -> Result<String> {
        self.value.to_text()
    }
}

impl<T: Scalar> From<T> for Plain<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Str {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl<T: Scalar> PartialEq for Plain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Scalar> Eq for Plain<T> {}

impl<T: Scalar> PartialOrd for Plain<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Scalar> Ord for Plain<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl<T: Scalar> Hash for Plain<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash_scalar(state);
    }
}

impl<T: Scalar> fmt::Display for Plain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.to_text() {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{:?}", self.value),
        }
    }
}
