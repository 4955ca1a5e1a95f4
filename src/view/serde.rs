//! Serde support.
//!
//! A byte view serializes as a byte string. Deserialization borrows from
//! the deserializer's input (like serde's own `&[u8]` support) and always
//! yields an untagged view: the serialized form carries no terminator
//! knowledge.

use core::fmt;

use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ZView;

impl Serialize for ZView<'_, u8> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(self.as_slice())
    }
}

struct ZViewVisitor;

impl<'de> Visitor<'de> for ZViewVisitor {
    type Value = ZView<'de, u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a borrowed byte array")
    }

    fn visit_borrowed_bytes<E>(self, v: &'de [u8]) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(ZView::from_slice(v))
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(ZView::from_slice(v.as_bytes()))
    }
}

impl<'de: 'borrow, 'borrow> Deserialize<'de> for ZView<'borrow, u8> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(ZViewVisitor)
    }
}
