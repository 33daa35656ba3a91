//! Nullable wrappers — scalars with an explicit validity flag.
//!
//! `null` and missing fields decode to an invalid wrapper holding the zero
//! value. For the numeric types a blank (empty or whitespace-only) string is
//! also treated as null; the string and boolean types keep blank strings as
//! ordinary values.
//!
//! Invalid wrappers encode as `null` and cannot be used as map keys.

use crate::convert::{self, Scalar};
use crate::error::{FtError, Result};
use crate::probe::{probe, Probe, ProbedKind};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Lenient scalar that tracks whether it was present.
///
/// The fields are private so that an invalid wrapper always holds the zero
/// value of `T`.
#[derive(Debug, Clone)]
pub struct Nullable<T> {
    value: T,
    valid: bool,
}

pub type NStr = Nullable<String>;
pub type NInt = Nullable<i64>;
pub type NFloat = Nullable<f64>;
pub type NBool = Nullable<bool>;

impl<T: Scalar> Nullable<T> {
    /// A present value.
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    /// The null state: invalid, zero value.
    pub fn null() -> Self {
        Self {
            value: T::default(),
            valid: false,
        }
    }

    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }

    /// The held value; the zero value when null.
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }

    /// Decode one raw JSON scalar token.
    pub fn from_json(raw: &str) -> Result<Self> {
        Self::from_probe(probe(raw)?)
    }

    /// Encode as a canonical JSON literal, or `null` when invalid.
    pub fn to_json(&self) -> Result<String> {
        if !self.valid {
            return Ok("null".to_string());
        }
        self.value.to_json()
    }

    /// Decode map-key text. Text that would decode to null is rejected.
    pub fn from_text(text: &str) -> Result<Self> {
        let decoded = Self::from_probe(Probe {
            kind: ProbedKind::String(text.to_string()),
            literal: text,
        })?;
        if decoded.is_null() {
            return Err(invalid_key::<T>());
        }
        Ok(decoded)
    }

    /// Map-key text. Fails for the null state.
    pub fn to_text(&self) -> Result<String> {
        if !self.valid {
            return Err(invalid_key::<T>());
        }
        self.value.to_text()
    }

    fn from_probe(probe: Probe<'_>) -> Result<Self> {
        match &probe.kind {
            ProbedKind::Null => return Ok(Self::null()),
            ProbedKind::String(s) if T::BLANK_IS_NULL && s.trim().is_empty() => {
                return Ok(Self::null());
            }
            _ => {}
        }
        T::from_probe(probe).map(Self::new)
    }
}

impl NInt {
    /// Parse a base-10 integer string into a valid `NInt`.
    ///
    /// Unlike decoding, a blank string is an error here.
    pub fn parse_str(s: &str) -> Result<Self> {
        convert::to_int(Probe {
            kind: ProbedKind::String(s.to_string()),
            literal: s,
        })
        .map(Self::new)
    }
}

fn invalid_key<T: Scalar>() -> FtError {
    FtError::InvalidKey {
        type_name: T::NULLABLE_NAME,
    }
}

impl<T: Scalar> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Scalar> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for NStr {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl<T: Scalar> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Scalar> Eq for Nullable<T> {}

impl<T: Scalar> PartialOrd for Nullable<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Null sorts before every valid value.
impl<T: Scalar> Ord for Nullable<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.valid, other.valid) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => self.value.total_cmp(&other.value),
        }
    }
}

impl<T: Scalar> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.value.hash_scalar(state);
        }
    }
}
