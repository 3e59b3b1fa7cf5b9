//! `NullInt32`, an `i32` that may be SQL NULL / JSON null.
//!
//! The type pairs a value with a validity flag so a nullable integer column
//! can be read from the driver, bound back as a parameter, and carried through
//! JSON without an `Option<Box<_>>` or a sentinel value.
//!
//! ```rust
//! use nulltype::NullInt32;
//!
//! let present = NullInt32::new(42);
//! assert_eq!(present.to_string(), "42");
//!
//! let absent = NullInt32::null();
//! assert_eq!(absent.to_string(), "<null>");
//! assert!(absent.is_zero_or_null());
//! ```

/// An `i32` that may be null.
///
/// `value` is only meaningful when `valid` is true. Every conversion in this
/// crate that produces a null also resets `value` to 0.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullInt32 {
    pub value: i32,
    pub valid: bool,
}

impl NullInt32 {
    /// A non-null value.
    pub const fn new(value: i32) -> Self {
        Self { value, valid: true }
    }

    /// The null value (`value = 0`, `valid = false`).
    pub const fn null() -> Self {
        Self {
            value: 0,
            valid: false,
        }
    }

    /// Returns `Some(value)` when valid, `None` otherwise.
    pub fn as_option(self) -> Option<i32> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Returns true if the value is null or zero.
    ///
    /// Treats both states as "nothing meaningful here". Use `valid` to tell
    /// them apart.
    pub fn is_zero_or_null(&self) -> bool {
        !self.valid || self.value == 0
    }
}

impl std::fmt::Display for NullInt32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            return write!(f, "<null>");
        }
        write!(f, "{}", self.value)
    }
}

impl From<i32> for NullInt32 {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Option<i32>> for NullInt32 {
    fn from(value: Option<i32>) -> Self {
        match value {
            Some(v) => Self::new(v),
            None => Self::null(),
        }
    }
}

impl From<NullInt32> for Option<i32> {
    fn from(value: NullInt32) -> Self {
        value.as_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        let n = NullInt32::default();
        assert_eq!(n, NullInt32::null());
        assert!(!n.valid);
        assert_eq!(n.value, 0);
    }

    #[test]
    fn test_is_zero_or_null() {
        assert!(!NullInt32::new(5).is_zero_or_null());
        assert!(NullInt32::new(0).is_zero_or_null());
        assert!(NullInt32::null().is_zero_or_null());
        // Direct construction may leave stale data behind a false flag.
        let stale = NullInt32 {
            value: 5,
            valid: false,
        };
        assert!(stale.is_zero_or_null());
    }

    #[test]
    fn test_display() {
        assert_eq!(NullInt32::null().to_string(), "<null>");
        assert_eq!(NullInt32::new(123).to_string(), "123");
        assert_eq!(NullInt32::new(-7).to_string(), "-7");
        assert_eq!(NullInt32::new(0).to_string(), "0");
        assert_eq!(NullInt32::new(i32::MIN).to_string(), "-2147483648");
        let stale = NullInt32 {
            value: 9,
            valid: false,
        };
        assert_eq!(stale.to_string(), "<null>");
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(NullInt32::from(Some(3)), NullInt32::new(3));
        assert_eq!(NullInt32::from(None), NullInt32::null());
        assert_eq!(Option::<i32>::from(NullInt32::new(-1)), Some(-1));
        assert_eq!(NullInt32::null().as_option(), None);
        assert_eq!(NullInt32::from(8), NullInt32::new(8));
    }
}
