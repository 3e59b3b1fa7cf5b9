//! PostgreSQL binding for `NullInt32`
//!
//! Implements `postgres_types::FromSql` and `ToSql` so the type can be read
//! from and bound to `INT2`, `INT4` and `INT8` columns directly. Text columns
//! are accepted on read and parsed the same way the `Scanner` parses text.

use std::error::Error;

use bytes::BytesMut;
use postgres_types::{accepts, to_sql_checked, FromSql, IsNull, ToSql, Type};
use sea_query::Value;

use crate::value::Scanner;
use crate::{NullError, NullInt32};

impl<'a> FromSql<'a> for NullInt32 {
    fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        let value = if *ty == Type::INT2 {
            Value::SmallInt(Some(i16::from_sql(ty, raw)?))
        } else if *ty == Type::INT4 {
            Value::Int(Some(i32::from_sql(ty, raw)?))
        } else if *ty == Type::INT8 {
            Value::BigInt(Some(i64::from_sql(ty, raw)?))
        } else {
            Value::String(Some(<&str as FromSql>::from_sql(ty, raw)?.to_owned()))
        };

        let mut scanned = NullInt32::null();
        scanned.scan(value)?;
        Ok(scanned)
    }

    fn from_sql_null(_: &Type) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(NullInt32::null())
    }

    fn accepts(ty: &Type) -> bool {
        matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8) || <&str as FromSql>::accepts(ty)
    }
}

impl ToSql for NullInt32 {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        if !self.valid {
            return Ok(IsNull::Yes);
        }

        if *ty == Type::INT2 {
            let narrow = i16::try_from(self.value).map_err(|_| NullError::OutOfRange {
                value: i64::from(self.value),
                target: "i16",
            })?;
            narrow.to_sql(ty, out)
        } else if *ty == Type::INT8 {
            i64::from(self.value).to_sql(ty, out)
        } else {
            self.value.to_sql(ty, out)
        }
    }

    accepts!(INT2, INT4, INT8);

    to_sql_checked!();
}
