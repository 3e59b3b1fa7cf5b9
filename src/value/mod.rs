//! Driver value protocol for nullable types
//!
//! This module provides the two traits a nullable type implements to move
//! between application code and a database driver. Driver-native values are
//! represented by `sea_query::Value`.
//!
//! ## Traits
//!
//! - **`Scanner`** - Populate `self` from a value read out of a row
//! - **`Valuer`** - Produce a value the driver can bind as a parameter

use sea_query::Value;

use crate::NullError;

pub mod int32;

/// Populate a nullable type from a driver-native value.
///
/// ## Usage
///
/// ```rust
/// use nulltype::{NullInt32, Scanner};
/// use sea_query::Value;
///
/// let mut n = NullInt32::default();
/// n.scan(Value::String(Some("123".to_string()))).unwrap();
/// assert_eq!(n, NullInt32::new(123));
///
/// n.scan(Value::Int(None)).unwrap();
/// assert_eq!(n, NullInt32::null());
/// ```
pub trait Scanner {
    /// Overwrite `self` with the decoded `raw` value.
    ///
    /// # Errors
    ///
    /// Returns a `NullError` if `raw` is of an unsupported variant or cannot
    /// be converted. `self` is left untouched on error.
    fn scan(&mut self, raw: Value) -> Result<(), NullError>;
}

/// Produce a driver-native value for parameter binding.
pub trait Valuer {
    /// The value to bind. A null is returned as a `None` variant.
    fn driver_value(&self) -> Value;
}

/// Returns true if `value` is the null form of any variant.
pub fn is_null(value: &Value) -> bool {
    *value == value.as_null()
}

/// Name of the `Value` variant, for diagnostics.
pub fn variant_name(value: &Value) -> String {
    // `as_null` drops the payload, leaving e.g. `Double(None)`.
    let null = format!("{:?}", value.as_null());
    match null.split_once('(') {
        Some((name, _)) => name.to_string(),
        None => null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::OptionEnum;

    #[test]
    fn test_is_null() {
        assert!(is_null(&Value::Int(None)));
        assert!(is_null(&Value::String(None)));
        assert!(is_null(&Value::Double(None)));
        assert!(is_null(&Value::Json(None)));
        assert!(!is_null(&Value::Int(Some(0))));
        assert!(!is_null(&Value::String(Some(String::new()))));
    }

    #[test]
    fn test_is_null_enum_and_gated_variants() {
        assert!(is_null(&Value::Enum(OptionEnum::None("mood".into()))));
        assert!(is_null(&Value::ChronoDate(None)));
    }

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name(&Value::Double(Some(1.5))), "Double");
        assert_eq!(variant_name(&Value::Float(None)), "Float");
        assert_eq!(variant_name(&Value::Bool(Some(true))), "Bool");
        assert_eq!(variant_name(&Value::Bytes(Some(vec![1]))), "Bytes");
        assert_eq!(variant_name(&Value::Enum(OptionEnum::None("mood".into()))), "Enum");
        assert_eq!(variant_name(&Value::ChronoDate(None)), "ChronoDate");
    }
}
