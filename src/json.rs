//! JSON encoding and decoding for nullable types
//!
//! `NullInt32` encodes as the JSON literal `null` or as a number, both through
//! the explicit `marshal_json` / `unmarshal_json` pair and through `serde`, so
//! it can sit inside any derived struct:
//!
//! ```rust
//! use nulltype::NullInt32;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     id: i64,
//!     #[serde(default)]
//!     quota: NullInt32,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"id":1,"quota":null}"#).unwrap();
//! assert!(!row.quota.valid);
//! assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"id":1,"quota":null}"#);
//! ```

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{NullError, NullInt32};

const NULL_LITERAL: &[u8] = b"null";

/// Encode a native value as JSON text.
///
/// Infallible for anything convertible into a `serde_json::Value`.
pub fn marshal(value: impl Into<serde_json::Value>) -> Vec<u8> {
    value.into().to_string().into_bytes()
}

impl NullInt32 {
    /// Encode as JSON: `null` when not valid, otherwise the number.
    pub fn marshal_json(&self) -> Vec<u8> {
        if !self.valid {
            return NULL_LITERAL.to_vec();
        }
        marshal(self.value)
    }

    /// Decode JSON `null` or a number into `self`.
    ///
    /// # Errors
    ///
    /// Returns `NullError::Decode` for malformed JSON and for any value other
    /// than `null` or a number that fits an `i32`. `self` is left untouched
    /// on error.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), NullError> {
        *self = serde_json::from_slice::<NullInt32>(data)?;
        Ok(())
    }
}

impl Serialize for NullInt32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }
        serializer.serialize_i32(self.value)
    }
}

impl<'de> Deserialize<'de> for NullInt32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(NullInt32Visitor)
    }
}

/// Accepts `null` or an integer in `i32` range.
///
/// serde_json hands `-0` over as the float `-0.0`, so a negative zero is
/// taken as 0. Every other float is rejected.
struct NullInt32Visitor;

impl<'de> Visitor<'de> for NullInt32Visitor {
    type Value = NullInt32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or an integer between -2147483648 and 2147483647")
    }

    fn visit_none<E>(self) -> Result<NullInt32, E>
    where
        E: de::Error,
    {
        Ok(NullInt32::null())
    }

    fn visit_unit<E>(self) -> Result<NullInt32, E>
    where
        E: de::Error,
    {
        Ok(NullInt32::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<NullInt32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i32(self)
    }

    fn visit_i64<E>(self, value: i64) -> Result<NullInt32, E>
    where
        E: de::Error,
    {
        i32::try_from(value)
            .map(NullInt32::new)
            .map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_u64<E>(self, value: u64) -> Result<NullInt32, E>
    where
        E: de::Error,
    {
        i32::try_from(value)
            .map(NullInt32::new)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_f64<E>(self, value: f64) -> Result<NullInt32, E>
    where
        E: de::Error,
    {
        if value == 0.0 && value.is_sign_negative() {
            return Ok(NullInt32::new(0));
        }
        Err(E::invalid_type(Unexpected::Float(value), &self))
    }
}
