//! Generated values
//!
//! Every generation call in [`generate`](crate::generate) returns a
//! `RandomValue` holding exactly one value of one of six shapes. Accessors
//! convert it along semantically sound paths only:
//!
//! | accessor      | accepted shapes                              |
//! |---------------|----------------------------------------------|
//! | `to_text`     | all                                          |
//! | `to_int`      | `Int`, `BigInt` (if it fits an `i64`)        |
//! | `to_bigint`   | `Int`, `BigInt`                              |
//! | `to_float`    | `Int`, `BigInt`, `Float`, `BigFloat` (finite)|
//! | `to_bigfloat` | `Int`, `BigInt`, `Float`, `BigFloat`         |
//! | `to_bytes`    | `Bytes`                                      |
//!
//! Anything else is a `TypeMismatch`.

use std::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use thiserror::Error;

use crate::primitives::{BigFloat, DEFAULT_PRECISION};

/// Errors returned by [`RandomValue`] accessors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The held shape cannot be converted to the requested representation.
    #[error("cannot convert {from} to {to}")]
    TypeMismatch {
        from: &'static str,
        to: &'static str,
    },

    /// The integer does not fit the requested width.
    #[error("integer does not fit in the requested width")]
    Overflow,

    /// The value has no finite representation in the requested type.
    #[error("value is out of range for the requested type")]
    OutOfRange,
}

/// A single generated value.
#[derive(Clone, Debug, PartialEq)]
pub enum RandomValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    BigInt(BigInt),
    Float(f64),
    BigFloat(BigFloat),
}

impl RandomValue {
    /// Name of the held shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Int(_) => "int",
            Self::BigInt(_) => "bigint",
            Self::Float(_) => "float",
            Self::BigFloat(_) => "bigfloat",
        }
    }

    /// Renders the value as text. Always succeeds.
    ///
    /// Numbers use their canonical decimal form (`BigFloat` in exact plain
    /// notation). Byte sequences are decoded as UTF-8, with invalid
    /// sequences replaced by `U+FFFD`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    pub fn to_int(&self) -> Result<i64, ConversionError> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::BigInt(v) => v.to_i64().ok_or(ConversionError::Overflow),
            _ => Err(self.mismatch("int")),
        }
    }

    pub fn to_bigint(&self) -> Result<BigInt, ConversionError> {
        match self {
            Self::Int(v) => Ok(BigInt::from(*v)),
            Self::BigInt(v) => Ok(v.clone()),
            _ => Err(self.mismatch("bigint")),
        }
    }

    /// Converts to the nearest `f64`.
    ///
    /// # Errors
    /// `OutOfRange` if an arbitrary-precision value maps to infinity.
    pub fn to_float(&self) -> Result<f64, ConversionError> {
        let value = match self {
            Self::Int(v) => *v as f64,
            Self::Float(v) => *v,
            Self::BigInt(v) => v.to_f64().ok_or(ConversionError::OutOfRange)?,
            Self::BigFloat(v) => v.to_f64(),
            _ => return Err(self.mismatch("float")),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConversionError::OutOfRange)
        }
    }

    /// Converts to a `BigFloat` at [`DEFAULT_PRECISION`], or the value's own
    /// precision if it already is one.
    pub fn to_bigfloat(&self) -> Result<BigFloat, ConversionError> {
        match self {
            Self::Int(v) => Ok(BigFloat::from_bigint(&BigInt::from(*v), DEFAULT_PRECISION)),
            Self::BigInt(v) => Ok(BigFloat::from_bigint(v, DEFAULT_PRECISION)),
            Self::Float(v) => BigFloat::from_f64(*v, DEFAULT_PRECISION).ok_or(ConversionError::OutOfRange),
            Self::BigFloat(v) => Ok(v.clone()),
            _ => Err(self.mismatch("bigfloat")),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ConversionError> {
        match self {
            Self::Bytes(v) => Ok(v.clone()),
            _ => Err(self.mismatch("bytes")),
        }
    }

    fn mismatch(&self, to: &'static str) -> ConversionError {
        ConversionError::TypeMismatch {
            from: self.kind(),
            to,
        }
    }
}

impl Display for RandomValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => f.write_str(v),
            Self::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            Self::Int(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::BigFloat(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for RandomValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for RandomValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<i64> for RandomValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<BigInt> for RandomValue {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<f64> for RandomValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<BigFloat> for RandomValue {
    fn from(value: BigFloat) -> Self {
        Self::BigFloat(value)
    }
}
