//! # nulltype
//!
//! Nullable scalar types that bind to database drivers and serialize to JSON.
//!
//! [`NullInt32`] represents an `INT` column that may be SQL NULL. It can be
//! scanned from a driver value ([`Scanner`]), bound as a parameter
//! ([`Valuer`]), and encoded to or decoded from JSON `null` / numbers.
//!
//! With the default `postgres` feature it also implements
//! `postgres_types::FromSql` and `ToSql`.

pub mod error;
pub mod int32;
pub mod json;
pub mod value;

#[cfg(feature = "postgres")]
mod postgres;

pub use error::NullError;
pub use int32::NullInt32;
pub use json::marshal;
pub use value::{Scanner, Valuer};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
