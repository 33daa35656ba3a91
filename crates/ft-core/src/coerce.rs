//! Coercion with the target chosen at runtime.
//!
//! The wrapper types fix their target at compile time. [`Target`] names one
//! of the eight wrappers by string (`int`, `nbool`, ...) so that tools can
//! pick it from user input, and [`coerce`] decodes a token into that wrapper
//! and re-encodes it.

use crate::codec::FromToken;
use crate::convert::Scalar;
use crate::error::{FtError, Result};
use crate::nullable::Nullable;
use crate::plain::Plain;
use std::fmt;
use std::str::FromStr;

/// The scalar type a token is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Int,
    Float,
    Bool,
}

/// A wrapper type: scalar kind plus family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub kind: ScalarKind,
    pub nullable: bool,
}

impl Target {
    pub const fn plain(kind: ScalarKind) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub const fn nullable(kind: ScalarKind) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }
}

impl FromStr for Target {
    type Err = FtError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let (nullable, base) = match name.strip_prefix('n') {
            // a bare "n" names nothing
            Some(rest) if !rest.is_empty() => (true, rest),
            _ => (false, name.as_str()),
        };
        let kind = match base {
            "string" | "str" => ScalarKind::String,
            "int" => ScalarKind::Int,
            "float" => ScalarKind::Float,
            "bool" => ScalarKind::Bool,
            _ => return Err(FtError::UnknownTarget(s.to_string())),
        };
        Ok(Self { kind, nullable })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            f.write_str("n")?;
        }
        f.write_str(match self.kind {
            ScalarKind::String => "string",
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Bool => "bool",
        })
    }
}

/// Decode `raw` into the wrapper named by `target` and return its canonical
/// JSON literal. `None` stands for a missing field.
pub fn coerce(raw: Option<&str>, target: Target) -> Result<String> {
    match target.kind {
        ScalarKind::String => reencode::<String>(raw, target.nullable),
        ScalarKind::Int => reencode::<i64>(raw, target.nullable),
        ScalarKind::Float => reencode::<f64>(raw, target.nullable),
        ScalarKind::Bool => reencode::<bool>(raw, target.nullable),
    }
}

fn reencode<T: Scalar>(raw: Option<&str>, nullable: bool) -> Result<String> {
    if nullable {
        Nullable::<T>::from_token(raw)?.to_json()
    } else {
        Plain::<T>::from_token(raw)?.to_json()
    }
}
