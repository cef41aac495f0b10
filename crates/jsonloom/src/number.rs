//! Numeric scalars that remember the kind of number they were written as.
//!
//! The generator accepts several numeric widths and must hand every one of
//! them back unchanged: integers stay integers, decimals stay decimals, and
//! nothing is silently widened into floating point. [`Number`] is the tagged
//! representation that makes this possible.

use rust_decimal::Decimal;

/// A numeric scalar inside a [`Value`](crate::Value) tree.
///
/// Conversions via [`From`] pick the narrowest variant that holds the value
/// exactly, so the same mathematical integer compares equal no matter which
/// integer width it was written through:
///
/// ```
/// use jsonloom::Number;
///
/// assert_eq!(Number::from(17u64), Number::from(17i32));
/// assert_eq!(Number::from(17u64), Number::Int(17));
/// ```
///
/// Values that cannot be narrowed keep their own variant: a `u64` above
/// `i64::MAX` stays [`UInt`](Number::UInt), an `i128` outside the 64-bit
/// range stays [`Int128`](Number::Int128), and floating-point input is never
/// reinterpreted as an integer (or the reverse).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// Signed integer in the 64-bit range.
    Int(i64),
    /// Unsigned integer above `i64::MAX`.
    UInt(u64),
    /// Integer outside the 64-bit range in either direction.
    Int128(i128),
    /// Binary floating point.
    Float(f64),
    /// Exact decimal.
    Decimal(Decimal),
}

impl Number {
    /// Returns the value as an `i64` if it is an integer in range.
    ///
    /// ```
    /// use jsonloom::Number;
    ///
    /// assert_eq!(Number::Int(-3).as_i64(), Some(-3));
    /// assert_eq!(Number::UInt(u64::MAX).as_i64(), None);
    /// assert_eq!(Number::Float(3.0).as_i64(), None);
    /// ```
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::UInt(v) => i64::try_from(*v).ok(),
            Self::Int128(v) => i64::try_from(*v).ok(),
            Self::Float(_) | Self::Decimal(_) => None,
        }
    }

    /// Returns the value as a `u64` if it is a non-negative integer in range.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(v) => u64::try_from(*v).ok(),
            Self::UInt(v) => Some(*v),
            Self::Int128(v) => u64::try_from(*v).ok(),
            Self::Float(_) | Self::Decimal(_) => None,
        }
    }

    /// Returns the value as an `f64` if it was written as floating point.
    ///
    /// Integer and decimal variants return `None` rather than converting,
    /// since a lossy read would defeat the point of keeping them apart.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a [`Decimal`] if it was written as one.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::UInt(value),
        }
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Int128(value),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        // f32 -> f64 is exact for every f32, including non-finite ones.
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use serde::{Serialize, Serializer};

    use super::Number;

    impl Serialize for Number {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match self {
                Number::Int(v) => serializer.serialize_i64(*v),
                Number::UInt(v) => serializer.serialize_u64(*v),
                Number::Int128(v) => serializer.serialize_i128(*v),
                Number::Float(v) => serializer.serialize_f64(*v),
                // UFCS: `Decimal` has an inherent `serialize` returning its
                // raw bytes, which would shadow the trait method here.
                Number::Decimal(v) => Serialize::serialize(v, serializer),
            }
        }
    }
}
