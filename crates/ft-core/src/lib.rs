//! # ft-core
//!
//! Lenient JSON scalar wrappers. Any JSON primitive (string, number, boolean,
//! null or a missing field) decodes into one of four typed wrappers instead of
//! failing on a type mismatch, and every wrapper encodes back to a canonical
//! JSON literal.
//!
//! Two families share the same coercion rules:
//!
//! - **Plain** ([`Str`], [`Int`], [`Float`], [`Bool`]) — always present;
//!   `null` and missing fields become the zero value.
//! - **Nullable** ([`NStr`], [`NInt`], [`NFloat`], [`NBool`]) — carry a
//!   validity flag; `null`, missing fields and (for the numeric types) blank
//!   strings decode to the invalid state and encode as `null`.
//!
//! ## Quick start
//!
//! ```rust
//! use ft_core::{Int, NBool, NInt, Str};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Form {
//!     id: Str,
//!     count: NInt,
//!     active: NBool,
//!     total: Int,
//! }
//!
//! let form: Form =
//!     serde_json::from_str(r#"{"id": 123, "count": "  ", "active": -1.23}"#).unwrap();
//! assert_eq!(form.id.value(), "123");
//! assert!(form.count.is_null());
//! assert_eq!(form.active.as_option(), Some(&true));
//! assert_eq!(*form.total.value(), 0);
//!
//! assert_eq!(
//!     serde_json::to_string(&form).unwrap(),
//!     r#"{"id":"123","count":null,"active":true,"total":0}"#
//! );
//! ```
//!
//! `#[serde(skip_serializing_if = ...)]` is up to the caller: a null
//! `Nullable` field is written as `null` unless the containing struct opts out
//! with e.g. `skip_serializing_if = "NInt::is_null"`.
//!
//! Maps keyed by wrappers need `#[serde(with = "ft_core::keys")]` on the
//! field. A bare `BTreeMap<Int, _>` or `HashMap<NStr, _>` is rejected by
//! `serde_json` with "key must be a string", for Plain keys too; see
//! [`keys`].
//!
//! ```rust
//! use ft_core::Int;
//! use std::collections::BTreeMap;
//!
//! let bare = BTreeMap::from([(Int::new(123), true)]);
//! assert!(serde_json::to_string(&bare).is_err());
//!
//! #[derive(serde::Serialize)]
//! struct Flags {
//!     #[serde(with = "ft_core::keys")]
//!     by_id: BTreeMap<Int, bool>,
//! }
//! let flags = Flags { by_id: bare };
//! assert_eq!(serde_json::to_string(&flags).unwrap(), r#"{"by_id":{"123":true}}"#);
//! ```
//!
//! ## Modules
//!
//! - [`probe`] — classify a raw token as null/string/integer/float/boolean
//! - [`convert`] — per-target conversion rules and the [`Scalar`] trait
//! - [`sanitize`] — control-character removal and string quoting
//! - [`plain`] / [`nullable`] — the two wrapper families
//! - [`keys`] — wrappers as JSON object keys
//! - [`coerce`] — runtime-selected target (`"nint"`, `"bool"`, ...)
//! - [`error`] — error type

mod codec;
pub mod coerce;
pub mod convert;
pub mod error;
pub mod keys;
pub mod nullable;
pub mod plain;
pub mod probe;
pub mod sanitize;

pub use coerce::{coerce, ScalarKind, Target};
pub use convert::Scalar;
pub use error::{FtError, Result};
pub use keys::TextKey;
pub use nullable::{NBool, NFloat, NInt, NStr, Nullable};
pub use plain::{Bool, Float, Int, Plain, Str};
pub use probe::{probe, Probe, ProbedKind};
pub use sanitize::clean;
