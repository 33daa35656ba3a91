//! Text-Key Adapter — wrappers as JSON object keys.
//!
//! JSON object keys are always strings, so a map keyed by wrappers needs a
//! textual form of each key. [`TextKey`] provides it, and this module doubles
//! as a `#[serde(with = "ft_core::keys")]` helper for `HashMap` and `BTreeMap`
//! fields:
//!
//! ```
//! use ft_core::{Int, NInt};
//! use serde::{Deserialize, Serialize};
//! use std::collections::BTreeMap;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Data {
//!     #[serde(with = "ft_core::keys")]
//!     counts: BTreeMap<Int, bool>,
//!     #[serde(with = "ft_core::keys")]
//!     optional: BTreeMap<NInt, bool>,
//! }
//!
//! let mut d = Data { counts: BTreeMap::new(), optional: BTreeMap::new() };
//! d.counts.insert(Int::new(123), true);
//! assert_eq!(
//!     serde_json::to_string(&d).unwrap(),
//!     r#"{"counts":{"123":true},"optional":{}}"#
//! );
//!
//! // A null key would silently vanish, so encoding fails instead.
//! d.optional.insert(NInt::null(), true);
//! assert!(serde_json::to_string(&d).is_err());
//! ```

use crate::convert::Scalar;
use crate::error::Result;
use crate::nullable::Nullable;
use crate::plain::Plain;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{self, Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::marker::PhantomData;

/// A type with a canonical textual form usable as a JSON object key.
pub trait TextKey: Sized {
    fn to_text(&self) -> Result<String>;
    fn from_text(text: &str) -> Result<Self>;
}

impl<T: Scalar> TextKey for Plain<T> {
    fn to_text(&self) -> Result<String> {
        Plain::to_text(self)
    }

    fn from_text(text: &str) -> Result<Self> {
        Plain::from_text(text)
    }
}

impl<T: Scalar> TextKey for Nullable<T> {
    fn to_text(&self) -> Result<String> {
        Nullable::to_text(self)
    }

    fn from_text(text: &str) -> Result<Self> {
        Nullable::from_text(text)
    }
}

/// A map whose keys are [`TextKey`]s.
pub trait KeyedMap {
    type Key: TextKey;
    type Value;

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K: TextKey, V, H> KeyedMap for HashMap<K, V, H> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: TextKey, V> KeyedMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

/// Serialize a wrapper-keyed map as a JSON object.
pub fn serialize<M, S>(map: &M, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    M: KeyedMap,
    M::Value: Serialize,
    S: Serializer,
{
    let mut out = serializer.serialize_map(None)?;
    for (key, value) in map.entries() {
        let text = key.to_text().map_err(ser::Error::custom)?;
        out.serialize_entry(&text, value)?;
    }
    out.end()
}

/// Deserialize a JSON object into a wrapper-keyed map.
pub fn deserialize<'de, M, D>(deserializer: D) -> std::result::Result<M, D::Error>
where
    M: KeyedMap + Default + Extend<(M::Key, M::Value)>,
    M::Value: Deserialize<'de>,
    D: Deserializer<'de>,
{
    deserializer.deserialize_map(KeyedMapVisitor(PhantomData))
}

struct KeyedMapVisitor<M>(PhantomData<M>);

impl<'de, M> Visitor<'de> for KeyedMapVisitor<M>
where
    M: KeyedMap + Default + Extend<(M::Key, M::Value)>,
    M::Value: Deserialize<'de>,
{
    type Value = M;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object with scalar-text keys")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<M, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = M::default();
        while let Some((text, value)) = access.next_entry::<String, M::Value>()? {
            let key = <M::Key as TextKey>::from_text(&text).map_err(de::Error::custom)?;
            map.extend(std::iter::once((key, value)));
        }
        Ok(map)
    }
}
