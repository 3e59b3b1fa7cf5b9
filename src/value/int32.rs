//! `Scanner` and `Valuer` for `NullInt32`
//!
//! Accepted scan inputs:
//!
//! - any null variant
//! - `String` and `Bytes` holding a base-10 integer
//! - `TinyInt`, `SmallInt`, `Int` (widened)
//! - `BigInt` (range-checked)
//!
//! Everything else is rejected with `NullError::UnsupportedType`.

use sea_query::Value;

use crate::value::{is_null, variant_name, Scanner, Valuer};
use crate::{NullError, NullInt32};

fn parse_decimal(text: &str) -> Result<i32, NullError> {
    Ok(text.parse::<i32>()?)
}

fn narrow(value: i64) -> Result<i32, NullError> {
    i32::try_from(value).map_err(|_| NullError::OutOfRange { value, target: "i32" })
}

impl Scanner for NullInt32 {
    fn scan(&mut self, raw: Value) -> Result<(), NullError> {
        log::trace!("scanning {} into NullInt32", variant_name(&raw));

        // Build the new state first so a failed scan leaves `self` untouched.
        let scanned = match raw {
            Value::TinyInt(Some(v)) => NullInt32::new(i32::from(v)),
            Value::SmallInt(Some(v)) => NullInt32::new(i32::from(v)),
            Value::Int(Some(v)) => NullInt32::new(v),
            Value::BigInt(Some(v)) => NullInt32::new(narrow(v)?),
            Value::String(Some(text)) => NullInt32::new(parse_decimal(&text)?),
            Value::Bytes(Some(bytes)) => {
                NullInt32::new(parse_decimal(&String::from_utf8_lossy(&bytes))?)
            }
            ref other if is_null(other) => NullInt32::null(),
            ref other => {
                return Err(NullError::UnsupportedType {
                    type_name: variant_name(other),
                })
            }
        };

        *self = scanned;
        Ok(())
    }
}

impl Valuer for NullInt32 {
    fn driver_value(&self) -> Value {
        if !self.valid {
            return Value::BigInt(None);
        }
        Value::BigInt(Some(i64::from(self.value)))
    }
}

impl From<NullInt32> for Value {
    fn from(value: NullInt32) -> Self {
        value.driver_value()
    }
}

impl TryFrom<Value> for NullInt32 {
    type Error = NullError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let mut scanned = NullInt32::null();
        scanned.scan(raw)?;
        Ok(scanned)
    }
}
