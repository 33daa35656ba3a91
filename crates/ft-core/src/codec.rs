//! serde integration for both wrapper families.
//!
//! Decoding asks the deserializer for an option first so that serde's
//! missing-field path and an explicit `null` both arrive as `visit_none`.
//! Any other token is captured as a [`Value`] and rendered back to its JSON
//! literal for the probe. With `arbitrary_precision` a [`Value`] number keeps
//! its source digits, so String targets see the exact original literal, and
//! the capture works behind serde's content buffering (`flatten`,
//! `untagged`, internally tagged enums) as well as on the direct parser.
//!
//! Encoding emits the wrapper's canonical literal as a [`RawValue`], so the
//! bytes written by `serde_json` are exactly those of `to_json`.

use crate::convert::Scalar;
use crate::nullable::Nullable;
use crate::plain::Plain;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// A wrapper decodable from an optional raw token. `None` stands for an
/// explicit `null` or a missing field.
pub(crate) trait FromToken: Sized {
    fn from_token(raw: Option<&str>) -> crate::error::Result<Self>;
}

impl<T: Scalar> FromToken for Plain<T> {
    fn from_token(raw: Option<&str>) -> crate::error::Result<Self> {
        match raw {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }
}

impl<T: Scalar> FromToken for Nullable<T> {
    fn from_token(raw: Option<&str>) -> crate::error::Result<Self> {
        match raw {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::null()),
        }
    }
}

struct TokenVisitor<W>(PhantomData<W>);

impl<'de, W: FromToken> Visitor<'de> for TokenVisitor<W> {
    type Value = W;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON string, number, boolean or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<W, E> {
        W::from_token(None).map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<W, E> {
        W::from_token(None).map_err(E::custom)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<W, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let literal = serde_json::to_string(&value).map_err(de::Error::custom)?;
        W::from_token(Some(&literal)).map_err(de::Error::custom)
    }
}

fn serialize_literal<S: Serializer>(
    literal: crate::error::Result<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let literal = literal.map_err(ser::Error::custom)?;
    let raw = RawValue::from_string(literal).map_err(ser::Error::custom)?;
    raw.serialize(serializer)
}

impl<T: Scalar> Serialize for Plain<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_literal(self.to_json(), serializer)
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Plain<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(TokenVisitor(PhantomData))
    }
}

impl<T: Scalar> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_literal(self.to_json(), serializer)
    }
}

impl<'de, T: Scalar> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(TokenVisitor(PhantomData))
    }
}
