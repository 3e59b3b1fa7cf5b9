//! Error types for nullable value conversions.
//!
//! This module provides the `NullError` enum returned by the database scan
//! path, the JSON decode path, and the PostgreSQL binding.

use std::num::ParseIntError;

/// Error type for `NullInt32` conversions
#[derive(Debug)]
pub enum NullError {
    /// Text or byte input is not a base-10 `i32`
    Parse(ParseIntError),
    /// The driver value variant is not one the scan path accepts
    UnsupportedType { type_name: String },
    /// JSON input is neither `null` nor an `i32` number
    Decode(serde_json::Error),
    /// A driver integer does not fit the target width
    OutOfRange { value: i64, target: &'static str },
}

impl std::fmt::Display for NullError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NullError::Parse(err) => write!(f, "Parse error: {}", err),
            NullError::UnsupportedType { type_name } => {
                write!(f, "unsupported type: {}", type_name)
            }
            NullError::Decode(err) => write!(f, "Decode error: {}", err),
            NullError::OutOfRange { value, target } => {
                write!(f, "Value {} is outside the valid range for {}", value, target)
            }
        }
    }
}

impl std::error::Error for NullError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NullError::Parse(err) => Some(err),
            NullError::Decode(err) => Some(err),
            NullError::UnsupportedType { .. } | NullError::OutOfRange { .. } => None,
        }
    }
}

impl From<ParseIntError> for NullError {
    fn from(err: ParseIntError) -> Self {
        NullError::Parse(err)
    }
}

impl From<serde_json::Error> for NullError {
    fn from(err: serde_json::Error) -> Self {
        NullError::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unsupported_type_message_names_variant() {
        let err = NullError::UnsupportedType {
            type_name: "Double".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported type: Double");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let parse = "abc".parse::<i32>().unwrap_err();
        let err = NullError::from(parse.clone());
        assert!(err.to_string().contains(&parse.to_string()));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let json = serde_json::from_str::<Option<i32>>("\"42\"").unwrap_err();
        let err = NullError::from(json);
        assert!(matches!(err, NullError::Decode(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = NullError::OutOfRange {
            value: 40_000,
            target: "i16",
        };
        assert_eq!(
            err.to_string(),
            "Value 40000 is outside the valid range for i16"
        );
    }
}
