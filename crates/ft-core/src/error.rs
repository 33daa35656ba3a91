//! Error types for scalar decoding and encoding.

use thiserror::Error;

/// Errors that can occur while coercing a JSON scalar or encoding a wrapper.
///
/// Every variant is terminal for the field being processed; a surrounding
/// `serde_json` call fails as a whole with the first error it meets.
#[derive(Error, Debug)]
pub enum FtError {
    /// The token was not valid JSON (propagated from `serde_json`).
    #[error("malformed JSON token: {0}")]
    MalformedToken(#[from] serde_json::Error),

    /// The token was valid JSON but not a scalar (array or object).
    #[error("expected a JSON scalar, found {found}")]
    NotScalar { found: &'static str },

    /// A string could not be parsed as the numeric target type.
    #[error("cannot parse {input:?} as {target}: {reason}")]
    NumericParse {
        input: String,
        target: &'static str,
        reason: String,
    },

    /// A boolean token was offered to a numeric target.
    #[error("value is a bool, cannot coerce to {target}")]
    TypeRejected { target: &'static str },

    /// A null `Nullable` wrapper was used as a map key.
    #[error("invalid {type_name} used as map key")]
    InvalidKey { type_name: &'static str },

    /// A coercion target name was not recognized.
    #[error("unknown target type {0:?} (expected string, int, float, bool, nstring, nint, nfloat or nbool)")]
    UnknownTarget(String),

    /// NaN and infinities have no JSON literal.
    #[error("non-finite float {0} cannot be encoded as JSON")]
    NonFinite(f64),
}

/// Convenience alias used throughout ft-core.
pub type Result<T> = std::result::Result<T, FtError>;
